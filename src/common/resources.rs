//! # Resource definitions for model weights, vocabularies and configuration files
//!
//! The pipelines reference the files they need (TorchScript weights, model
//! configuration, tokenizer vocabulary) through `Resource` abstractions rather
//! than raw paths. Two providers are available:
//! - `LocalResource`: points to a file on disk
//! - `RemoteResource` (behind the default `remote` feature): points to a URL,
//!   downloaded and cached on first use
//!
//! `get_local_path` returns the on-disk location in both cases, so pipeline
//! code does not care where a resource came from.

use crate::common::error::HazeSentimentError;
use std::path::PathBuf;

/// # Resource Trait providing the location of model, configuration or vocabulary files
pub trait ResourceProvider {
    /// Provides the local path for a resource, downloading it first if needed.
    ///
    /// # Returns
    ///
    /// * `PathBuf` pointing to the resource file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use haze_sentiment::resources::{LocalResource, ResourceProvider};
    /// use std::path::PathBuf;
    /// let config_resource = LocalResource {
    ///     local_path: PathBuf::from("path/to/config.json"),
    /// };
    /// let config_path = config_resource.get_local_path();
    /// ```
    fn get_local_path(&self) -> Result<PathBuf, HazeSentimentError>;
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for Box<T> {
    fn get_local_path(&self) -> Result<PathBuf, HazeSentimentError> {
        T::get_local_path(self)
    }
}

/// # Local resource
#[derive(PartialEq, Clone)]
pub struct LocalResource {
    /// Local path for the resource
    pub local_path: PathBuf,
}

impl ResourceProvider for LocalResource {
    fn get_local_path(&self) -> Result<PathBuf, HazeSentimentError> {
        Ok(self.local_path.clone())
    }
}

impl From<PathBuf> for LocalResource {
    fn from(local_path: PathBuf) -> Self {
        LocalResource { local_path }
    }
}

#[cfg(feature = "remote")]
mod remote {
    use super::*;
    use cached_path::{Cache, Options, ProgressBar};
    use dirs::cache_dir;
    use lazy_static::lazy_static;

    /// # Remote resource that will be downloaded and cached locally on demand
    #[derive(PartialEq, Clone)]
    pub struct RemoteResource {
        /// Remote path/url for the resource
        pub url: String,
        /// Local subdirectory of the cache root where this resource is saved
        pub cache_subdir: String,
    }

    impl RemoteResource {
        /// Creates a new RemoteResource from an URL and a cache subdirectory. This does
        /// not download the resource (only declares the remote and local locations).
        pub fn new(url: &str, cache_subdir: &str) -> RemoteResource {
            RemoteResource {
                url: url.to_string(),
                cache_subdir: cache_subdir.to_string(),
            }
        }

        /// Creates a new RemoteResource from a (name, url) tuple, as used by the
        /// pre-defined checkpoint constants in the pipelines.
        ///
        /// # Example
        ///
        /// ```no_run
        /// use haze_sentiment::resources::RemoteResource;
        /// let model_resource = RemoteResource::from_pretrained((
        ///     "twitter-xlm-roberta-sentiment/config",
        ///     "https://huggingface.co/cardiffnlp/twitter-xlm-roberta-base-sentiment/resolve/main/config.json",
        /// ));
        /// ```
        pub fn from_pretrained(name_url_tuple: (&str, &str)) -> RemoteResource {
            let cache_subdir = name_url_tuple.0.to_string();
            let url = name_url_tuple.1.to_string();
            RemoteResource { url, cache_subdir }
        }
    }

    impl ResourceProvider for RemoteResource {
        /// Downloads the remote resource if it is not cached yet, then returns the
        /// path to the local copy.
        fn get_local_path(&self) -> Result<PathBuf, HazeSentimentError> {
            let cached_path = CACHE
                .cached_path_with_options(&self.url, &Options::default().subdir(&self.cache_subdir))?;
            Ok(cached_path)
        }
    }

    lazy_static! {
    #[derive(Copy, Clone, Debug)]
    /// # Global cache directory
    /// If the environment variable `HAZE_SENTIMENT_CACHE` is set, resource files are
    /// cached at that location. Otherwise defaults to `$XDG_CACHE_HOME/.haze-sentiment`,
    /// or the corresponding user cache for the current system.
        pub static ref CACHE: Cache = Cache::builder()
            .dir(_get_cache_directory())
            .progress_bar(Some(ProgressBar::Light))
            .build().unwrap();
    }

    fn _get_cache_directory() -> PathBuf {
        match std::env::var("HAZE_SENTIMENT_CACHE") {
            Ok(value) => PathBuf::from(value),
            Err(_) => {
                let mut home = cache_dir().unwrap();
                home.push(".haze-sentiment");
                home
            }
        }
    }
}

#[cfg(feature = "remote")]
pub use remote::RemoteResource;
