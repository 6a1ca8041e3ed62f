//! Site content use cases: the public loader and the admin editors.

mod load_site_content;
mod manage_collection;
mod manage_roadmap;
mod manage_settings;

pub use load_site_content::{LoadSiteContent, SiteContentSources};
pub use manage_collection::{ManageCollection, MoveDirection};
pub use manage_roadmap::ManageRoadmap;
pub use manage_settings::ManageSettings;

use fomo_core::content::ContentValidationError;
use fomo_core::ports::ContentApiError;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid {resource}: {source}")]
    Validation {
        resource: &'static str,
        #[source]
        source: ContentValidationError,
    },

    #[error("{0} cannot be reordered")]
    NotReorderable(&'static str),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("nothing to update")]
    EmptyPatch,

    #[error(transparent)]
    Api(#[from] ContentApiError),
}
