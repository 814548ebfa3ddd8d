use std::path::PathBuf;

use kw_core::prelude::*;

#[derive(clap::Args, Clone, Debug, Default)]
pub struct ClusterArgs {
    #[arg(long, long_help = "path to the kubeconfig file (defaults to $KUBECONFIG or ~/.kube/config)")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long, long_help = "kubeconfig context to use (defaults to the current context)")]
    pub context: Option<String>,

    #[arg(
        short,
        long,
        long_help = "namespace to look in (defaults to the context's namespace); a namespace in the object name takes precedence"
    )]
    pub namespace: Option<String>,
}

impl ClusterArgs {
    pub fn options(&self) -> ClusterOptions {
        ClusterOptions::new(self.kubeconfig.as_deref(), self.context.as_deref(), self.namespace.as_deref())
    }

    // Returns the client along with the namespace objects are looked up in when the name
    // doesn't say otherwise
    pub async fn connect(&self) -> anyhow::Result<(kube::Client, String)> {
        let config = self.options().rest_config().await?;
        let ns = config.default_namespace.clone();
        Ok((kube::Client::try_from(config)?, ns))
    }
}
