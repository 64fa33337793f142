//! Context handle for the insight generator used by the chat widget.

use std::rc::Rc;

use common::insight::InsightGenerator;

/// Provided once by the app root; clones share the same generator.
#[derive(Clone)]
pub struct InsightHandle(pub Rc<dyn InsightGenerator>);

impl InsightHandle {
    pub fn generate_insight(&self, query: &str) -> String {
        self.0.generate_insight(query)
    }
}
