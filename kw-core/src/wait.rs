//! The single polling primitive that every "wait for X" helper in this crate is built on, plus a
//! few thin get/list wrappers.
use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use kube::api::ListParams;
use kube::Resource;
use serde::de::DeserializeOwned;
use tokio::time::{
    Instant,
    sleep,
    timeout,
};
use tracing::*;

use crate::conditions::Ready;
use crate::errors::*;
use crate::prelude::*;

err_impl! {WaitError,
    #[error("timed out: {0}")]
    Timeout(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WaitOptions {
    pub interval: Duration,
    pub timeout: Duration,

    // check once right away instead of sleeping for `interval` first
    pub immediate: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        WaitOptions {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_WAIT_TIMEOUT,
            immediate: true,
        }
    }
}

impl WaitOptions {
    pub fn with_timeout(timeout: Duration) -> WaitOptions {
        WaitOptions { timeout, ..Default::default() }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }
}

// Run `check` every `opts.interval` until it returns Some(value) or `opts.timeout` elapses.
// Errors from `check` are logged and retried; an in-flight check is cut off at the deadline.
pub async fn poll_until<T, F, Fut>(opts: &WaitOptions, what: &str, mut check: F) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    let deadline = Instant::now() + opts.timeout;
    let mut last_err: Option<String> = None;
    let mut attempt = 0;

    if !opts.immediate {
        sleep(opts.interval.min(opts.timeout)).await;
    }

    loop {
        attempt += 1;
        let remaining = deadline.saturating_duration_since(Instant::now());
        match timeout(remaining, check()).await {
            Ok(Ok(Some(val))) => {
                info!("{what} satisfied after {attempt} attempt(s)");
                return Ok(val);
            },
            Ok(Ok(None)) => debug!("{what} not satisfied yet (attempt {attempt})"),
            Ok(Err(err)) => {
                debug!("{what} check failed (attempt {attempt}), retrying: {err}");
                last_err = Some(err.to_string());
            },
            Err(_) => break,
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        sleep(opts.interval.min(remaining)).await;
    }

    let mut msg = format!("{what} not satisfied within {}", humantime::format_duration(opts.timeout));
    if let Some(err) = last_err {
        msg.push_str(&format!(" (last error: {err})"));
    }
    warn!("{msg}");
    Err(WaitError::timeout(&msg))
}

fn describe<K: Resource>(api: &kube::Api<K>, name: &str) -> String {
    format!("{}/{name}", api.resource_url())
}

// GET the named object on every attempt and hand it back once `pred` holds; not-found and any
// other API errors just mean "try again".
pub async fn wait_for<K, P>(api: &kube::Api<K>, name: &str, opts: &WaitOptions, pred: P) -> anyhow::Result<K>
where
    K: Resource + Clone + DeserializeOwned + Debug,
    P: Fn(&K) -> bool,
{
    let pred = &pred;
    poll_until(opts, &describe(api, name), move || async move {
        let obj = api.get(name).await?;
        Ok::<_, anyhow::Error>(pred(&obj).then_some(obj))
    })
    .await
}

pub async fn wait_for_ready<K>(api: &kube::Api<K>, name: &str, opts: &WaitOptions) -> anyhow::Result<K>
where
    K: Resource + Clone + DeserializeOwned + Debug + Ready,
{
    wait_for(api, name, opts, K::is_ready).await
}

pub async fn wait_for_exists<K>(api: &kube::Api<K>, name: &str, opts: &WaitOptions) -> anyhow::Result<K>
where
    K: Resource + Clone + DeserializeOwned + Debug,
{
    wait_for(api, name, opts, |_| true).await
}

pub async fn wait_for_deleted<K>(api: &kube::Api<K>, name: &str, opts: &WaitOptions) -> EmptyResult
where
    K: Resource + Clone + DeserializeOwned + Debug,
{
    poll_until(opts, &format!("deletion of {}", describe(api, name)), move || async move {
        let obj = api.get_opt(name).await?;
        Ok::<_, anyhow::Error>(obj.is_none().then_some(()))
    })
    .await
}

pub async fn get_namespaced<K>(client: kube::Client, ns: &str, name: &str) -> anyhow::Result<K>
where
    K: Resource<Scope = k8s_openapi::NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    Ok(kube::Api::<K>::namespaced(client, ns).get(name).await?)
}

pub async fn get_cluster<K>(client: kube::Client, name: &str) -> anyhow::Result<K>
where
    K: Resource<Scope = k8s_openapi::ClusterResourceScope> + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    Ok(kube::Api::<K>::all(client).get(name).await?)
}

pub async fn list_namespaced<K>(client: kube::Client, ns: &str, lp: &ListParams) -> anyhow::Result<Vec<K>>
where
    K: Resource<Scope = k8s_openapi::NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    let objs = kube::Api::<K>::namespaced(client, ns).list(lp).await?;
    debug!("found {} {} object(s) in {ns}", objs.items.len(), K::kind(&Default::default()));
    Ok(objs.items)
}

pub async fn list_cluster<K>(client: kube::Client, lp: &ListParams) -> anyhow::Result<Vec<K>>
where
    K: Resource + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    let objs = kube::Api::<K>::all(client).list(lp).await?;
    debug!("found {} {} object(s)", objs.items.len(), K::kind(&Default::default()));
    Ok(objs.items)
}
