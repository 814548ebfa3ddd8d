use std::path::{
    Path,
    PathBuf,
};

use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use tracing::*;

use crate::errors::*;
use crate::prelude::*;

err_impl! {ConfigError,
    #[error("could not read kubeconfig at {0}")]
    UnreadableKubeconfig(String),
}

// Where to find the cluster: either an explicit, already-constructed kube::Config, or the
// pieces needed to load one from a kubeconfig file.
#[derive(Clone, Debug, Default)]
pub struct ClusterOptions {
    pub config_path: Option<PathBuf>,
    pub context_name: Option<String>,
    pub namespace: Option<String>,
    pub rest_config: Option<kube::Config>,
}

impl ClusterOptions {
    pub fn new(config_path: Option<&Path>, context_name: Option<&str>, namespace: Option<&str>) -> ClusterOptions {
        ClusterOptions {
            config_path: config_path.map(Path::to_path_buf),
            context_name: context_name.map(String::from),
            namespace: namespace.map(String::from),
            rest_config: None,
        }
    }

    pub fn with_rest_config(config: kube::Config) -> ClusterOptions {
        ClusterOptions { rest_config: Some(config), ..Default::default() }
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    pub async fn rest_config(&self) -> anyhow::Result<kube::Config> {
        if let Some(config) = &self.rest_config {
            debug!("using explicitly-provided REST config for {}", config.cluster_url);
            return Ok(config.clone());
        }

        let kc_opts = KubeConfigOptions {
            context: self.context_name.clone(),
            ..Default::default()
        };

        let mut config = match &self.config_path {
            Some(path) => {
                debug!("loading kubeconfig from {}", path.display());
                let kubeconfig = Kubeconfig::read_from(path)
                    .map_err(|err| ConfigError::unreadable_kubeconfig(&format!("{}: {err}", path.display())))?;
                kube::Config::from_custom_kubeconfig(kubeconfig, &kc_opts).await?
            },
            None => kube::Config::from_kubeconfig(&kc_opts).await?,
        };

        if let Some(ns) = &self.namespace {
            config.default_namespace = ns.clone();
        }
        Ok(config)
    }

    pub async fn client(&self) -> anyhow::Result<kube::Client> {
        Ok(kube::Client::try_from(self.rest_config().await?)?)
    }
}
