pub mod expert_card;
pub mod directory_search_bar;
pub mod directory_filters;
pub mod directory_result_list;
