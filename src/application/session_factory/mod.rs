//! Session Factory Module
//!
//! Assembles a repository session from a build request.
//!
//! ## Structure
//!
//! - `factory` - Collaborators and the ordered assembly (`RepositorySessionFactory`)
//!
//! ## Usage
//!
//! ```ignore
//! use resolver_session::application::RepositorySessionFactory;
//!
//! let factory = RepositorySessionFactory::new(handlers, default_factory, decrypter, dispatcher);
//! let session = factory.assemble(&BuildRequest::new(local_repo))?;
//! ```

mod factory;

pub use factory::RepositorySessionFactory;
