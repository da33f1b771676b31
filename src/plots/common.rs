use serde::{Deserialize, Serialize};

use super::roots_of_unity::RootsOfUnityParams;

/**
 * Top-level type of a parameter file, e.g. `{ "RootsOfUnity": { ... } }`.
 */
#[derive(Serialize, Deserialize, Debug)]
pub enum PlotParams {
    RootsOfUnity(Box<RootsOfUnityParams>),
}

impl PlotParams {
    pub fn from_file(path: &str) -> Result<PlotParams, crate::core::error::PlotError> {
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_survive_json() {
        let params = PlotParams::RootsOfUnity(Box::new(RootsOfUnityParams::with_root_count(7)));
        let text = serde_json::to_string_pretty(&params).unwrap();
        assert!(text.contains("\"RootsOfUnity\""));

        let parsed: PlotParams = serde_json::from_str(&text).unwrap();
        let PlotParams::RootsOfUnity(inner) = parsed;
        assert_eq!(inner.root_count, 7);
        assert_eq!(inner.title, None);
        assert_eq!(inner.axes.radial_gridlines, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_missing_title_is_optional() {
        let mut value = serde_json::to_value(RootsOfUnityParams::with_root_count(3)).unwrap();
        value.as_object_mut().unwrap().remove("title");
        let params: RootsOfUnityParams = serde_json::from_value(value).unwrap();
        assert_eq!(params.title_text(), "3rd Roots of Unity");
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        assert!(matches!(
            PlotParams::from_file("does/not/exist.json"),
            Err(crate::core::error::PlotError::Io(_))
        ));
    }
}
