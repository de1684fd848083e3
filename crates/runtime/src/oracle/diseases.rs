use life_core::{DiseaseOracle, DiseaseTemplate};

/// DiseaseOracle backed by a fixed template list.
///
/// Template order is preserved; contraction picks by index.
#[derive(Default)]
pub struct DiseaseOracleImpl {
    templates: Vec<DiseaseTemplate>,
}

impl DiseaseOracleImpl {
    pub fn new(templates: Vec<DiseaseTemplate>) -> Self {
        Self { templates }
    }

    pub fn add_template(&mut self, template: DiseaseTemplate) {
        self.templates.push(template);
    }
}

impl DiseaseOracle for DiseaseOracleImpl {
    fn templates(&self) -> Vec<DiseaseTemplate> {
        self.templates.clone()
    }
}
