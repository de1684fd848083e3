use crate::state::TreatmentKind;

/// Catalog of diseases a character can contract.
pub trait DiseaseOracle: Send + Sync {
    fn templates(&self) -> Vec<DiseaseTemplate>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseTemplate {
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub treatment: Option<TreatmentKind>,
}

impl DiseaseTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        treatment: Option<TreatmentKind>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            treatment,
        }
    }
}
