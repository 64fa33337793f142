use dioxus::prelude::*;

use common::directory_query::ExpertQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::experts_page::ExpertsPage;
use crate::pages::landing_page::LandingPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    LandingPage {},


    #[route("/experts/:query")]
    ExpertsPage { query: UrlParam<ExpertQuery> },

}

impl Route {
    pub fn experts_page_from_query(q: ExpertQuery) -> Self {
        Self::ExpertsPage { query: UrlParam::from(q) }
    }
}
