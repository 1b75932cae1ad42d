pub mod engine;
pub mod ordering;
pub mod pipeline;
pub mod row;

pub use crate::domain::model::{Entry, Instance, RenderResult, Row};
pub use crate::domain::ports::{
    ConfigProvider, Pipeline, Storage, TableFormatter, TemplateRenderer,
};
pub use crate::utils::error::Result;
