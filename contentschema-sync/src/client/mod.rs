//! Management API access.
//!
//! The reconciliation engine only talks to the [`ManagementClient`] trait;
//! [`ContentfulClient`] is the HTTP implementation against the Contentful
//! Management API.

pub mod contentful;
pub mod management;

pub use contentful::{ContentfulClient, ContentfulConfig};
pub use management::ManagementClient;
