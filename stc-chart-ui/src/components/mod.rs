//! Reusable Dioxus RSX components for the token chart viewer.

mod buyer_list;
mod chart_embed;
mod chart_type_selector;
mod error_display;
mod loading_spinner;
mod price_chart_widget;
mod source_selector;
mod token_navigation;
mod token_summary;

pub use buyer_list::BuyerList;
pub use chart_embed::ChartEmbed;
pub use chart_type_selector::ChartTypeSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use price_chart_widget::PriceChartWidget;
pub use source_selector::SourceSelector;
pub use token_navigation::TokenNavigation;
pub use token_summary::TokenSummary;
