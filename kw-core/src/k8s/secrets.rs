use crate::prelude::*;
use crate::wait::get_namespaced;

pub async fn get_secret(client: kube::Client, ns: &str, name: &str) -> anyhow::Result<corev1::Secret> {
    get_namespaced(client, ns, name).await
}

pub fn secret_has_key(secret: &corev1::Secret, key: &str) -> bool {
    secret.data.as_ref().is_some_and(|d| d.contains_key(key))
        || secret.string_data.as_ref().is_some_and(|d| d.contains_key(key))
}
