// Most operators expose a family of kinds that all get the same pair of helpers: a list
// function and a "wait until Ready" function.  These macros stamp those out, using
// namespaced_ready_helpers!(Kind: singular, plural; ...) syntax, so that the per-operator
// modules only have to spell out the interesting (non-uniform) bits by hand.
macro_rules! namespaced_ready_helpers {
    ($($kind:ty: $singular:ident, $plural:ident;)+) => {
        paste::paste! {
            $(
                #[doc = concat!("List every `", stringify!($kind), "` in the given namespace.")]
                pub async fn [<list_ $plural>](client: kube::Client, ns: &str) -> anyhow::Result<Vec<$kind>> {
                    $crate::wait::list_namespaced(client, ns, &kube::api::ListParams::default()).await
                }

                #[doc = concat!("Poll the named `", stringify!($kind), "` until it reports ready, or fail after `timeout`.")]
                pub async fn [<wait_for_ $singular _ready>](
                    client: kube::Client,
                    ns: &str,
                    name: &str,
                    timeout: std::time::Duration,
                ) -> anyhow::Result<$kind> {
                    let api = kube::Api::<$kind>::namespaced(client, ns);
                    $crate::wait::wait_for_ready(&api, name, &$crate::wait::WaitOptions::with_timeout(timeout)).await
                }
            )+
        }
    };
}

macro_rules! cluster_ready_helpers {
    ($($kind:ty: $singular:ident, $plural:ident;)+) => {
        paste::paste! {
            $(
                #[doc = concat!("List every `", stringify!($kind), "` in the cluster.")]
                pub async fn [<list_ $plural>](client: kube::Client) -> anyhow::Result<Vec<$kind>> {
                    $crate::wait::list_cluster(client, &kube::api::ListParams::default()).await
                }

                #[doc = concat!("Poll the named `", stringify!($kind), "` until it reports ready, or fail after `timeout`.")]
                pub async fn [<wait_for_ $singular _ready>](
                    client: kube::Client,
                    name: &str,
                    timeout: std::time::Duration,
                ) -> anyhow::Result<$kind> {
                    let api = kube::Api::<$kind>::all(client);
                    $crate::wait::wait_for_ready(&api, name, &$crate::wait::WaitOptions::with_timeout(timeout)).await
                }
            )+
        }
    };
}

// For kinds that don't report any status at all; the best we can do is wait for them to show up.
macro_rules! namespaced_exists_helpers {
    ($($kind:ty: $singular:ident, $plural:ident;)+) => {
        paste::paste! {
            $(
                #[doc = concat!("List every `", stringify!($kind), "` in the given namespace.")]
                pub async fn [<list_ $plural>](client: kube::Client, ns: &str) -> anyhow::Result<Vec<$kind>> {
                    $crate::wait::list_namespaced(client, ns, &kube::api::ListParams::default()).await
                }

                pub async fn [<get_ $singular>](client: kube::Client, ns: &str, name: &str) -> anyhow::Result<$kind> {
                    $crate::wait::get_namespaced(client, ns, name).await
                }

                #[doc = concat!("Poll until the named `", stringify!($kind), "` exists, or fail after `timeout`.")]
                pub async fn [<wait_for_ $singular _exists>](
                    client: kube::Client,
                    ns: &str,
                    name: &str,
                    timeout: std::time::Duration,
                ) -> anyhow::Result<$kind> {
                    let api = kube::Api::<$kind>::namespaced(client, ns);
                    $crate::wait::wait_for_exists(&api, name, &$crate::wait::WaitOptions::with_timeout(timeout)).await
                }
            )+
        }
    };
}

// Implements `Ready` for kinds whose status carries a list of conditions, where readiness means
// the given condition type is "True", using impl_ready_from_condition!(COND_TYPE => Kind, ...)
macro_rules! impl_ready_from_condition {
    ($cond:expr => $($kind:ty),+ $(,)?) => {
        $(
            impl $crate::conditions::Ready for $kind {
                fn is_ready(&self) -> bool {
                    self.status
                        .as_ref()
                        .is_some_and(|s| $crate::conditions::has_true_condition(&s.conditions, $cond))
                }
            }
        )+
    };
}

pub(crate) use {
    cluster_ready_helpers,
    impl_ready_from_condition,
    namespaced_exists_helpers,
    namespaced_ready_helpers,
};
