//! Factory for creating transform pipelines

use super::handler::RasterTransform;
use super::rotate::Rotate90;
use super::threshold::Threshold;

/// Factory for creating raster transforms
pub struct TransformFactory;

impl TransformFactory {
    /// Transforms applied to every input, in output order
    pub fn standard_pipeline() -> Vec<Box<dyn RasterTransform>> {
        vec![Box::new(Threshold), Box::new(Rotate90)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pipeline_order() {
        let prefixes: Vec<&str> = TransformFactory::standard_pipeline()
            .iter()
            .map(|t| t.output_prefix())
            .collect();
        assert_eq!(prefixes, vec!["threshold_", "rotate_"]);
    }
}
