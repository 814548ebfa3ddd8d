use k8s_openapi::api::apps::v1 as appsv1;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1 as apiextv1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use kw_api::{
    CONDITION_FALSE,
    CONDITION_TRUE,
    Condition,
    READY_CONDITION,
};
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

pub fn test_metadata(name: &str, ns: Option<&str>) -> metav1::ObjectMeta {
    metav1::ObjectMeta {
        name: Some(name.into()),
        namespace: ns.map(String::from),
        ..Default::default()
    }
}

#[fixture]
pub fn ready_conditions() -> Vec<Condition> {
    vec![
        Condition::new("Reconciling", CONDITION_FALSE),
        Condition::new(READY_CONDITION, CONDITION_TRUE),
    ]
}

#[fixture]
pub fn not_ready_conditions() -> Vec<Condition> {
    vec![Condition {
        reason: Some("Pending".into()),
        message: Some("waiting for the controller".into()),
        ..Condition::new(READY_CONDITION, CONDITION_FALSE)
    }]
}

pub fn test_stateful_set(replicas: i32, updated: i32, available: i32, current: i32) -> appsv1::StatefulSet {
    appsv1::StatefulSet {
        metadata: test_metadata(TEST_NAME, Some(TEST_NAMESPACE)),
        spec: Some(appsv1::StatefulSetSpec { replicas: Some(replicas), ..Default::default() }),
        status: Some(appsv1::StatefulSetStatus {
            replicas,
            updated_replicas: Some(updated),
            available_replicas: Some(available),
            current_replicas: Some(current),
            ..Default::default()
        }),
    }
}

pub fn test_crd(established: &str, names_accepted: &str) -> apiextv1::CustomResourceDefinition {
    let cond = |type_: &str, status: &str| apiextv1::CustomResourceDefinitionCondition {
        type_: type_.into(),
        status: status.into(),
        ..Default::default()
    };
    apiextv1::CustomResourceDefinition {
        metadata: test_metadata("backups.velero.io", None),
        status: Some(apiextv1::CustomResourceDefinitionStatus {
            conditions: Some(vec![cond("Established", established), cond("NamesAccepted", names_accepted)]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// The fixtures below are shaped like what the controllers actually write, field casing and extra
// fields included, rather than built from the kw-api structs.

fn raw_metadata() -> serde_json::Value {
    json!({
        "name": TEST_NAME,
        "namespace": TEST_NAMESPACE,
        "uid": "6f1c8e2a-3b1d-4c1e-9a57-0d2f4c7b9e11",
        "resourceVersion": "48213",
        "generation": 2,
        "creationTimestamp": "2025-03-02T17:04:11Z",
    })
}

pub fn raw_argo_application(health: &str, sync: &str) -> serde_json::Value {
    json!({
        "apiVersion": "argoproj.io/v1alpha1",
        "kind": "Application",
        "metadata": raw_metadata(),
        "spec": {
            "project": "default",
            "source": {
                "repoURL": "https://github.com/argoproj/argocd-example-apps.git",
                "path": "guestbook",
                "targetRevision": "HEAD",
            },
            "destination": {"server": "https://kubernetes.default.svc", "namespace": "guestbook"},
            "syncPolicy": {"automated": {"prune": true, "selfHeal": true}},
        },
        "status": {
            "health": {"status": health, "lastTransitionTime": "2025-03-02T17:05:40Z"},
            "sync": {
                "status": sync,
                "revision": "53e28ff20cc530b9ada2173fbbd64d48338583ba",
                "comparedTo": {"source": {"repoURL": "https://github.com/argoproj/argocd-example-apps.git"}},
            },
            "conditions": [{
                "type": "SharedResourceWarning",
                "message": "Service/guestbook-ui is part of applications argocd/guestbook and argocd/other",
                "lastTransitionTime": "2025-03-02T17:05:12Z",
            }],
            "reconciledAt": "2025-03-02T17:05:40Z",
            "sourceType": "Directory",
        },
    })
}

pub fn raw_argo_event_bus(ready: &str) -> serde_json::Value {
    json!({
        "apiVersion": "argoproj.io/v1alpha1",
        "kind": "EventBus",
        "metadata": raw_metadata(),
        "spec": {"jetstream": {"version": "latest", "replicas": 3}},
        "status": {
            "conditions": [
                {"type": "Configured", "status": "True", "lastTransitionTime": "2025-03-02T17:04:12Z"},
                {"type": "Deployed", "status": ready, "lastTransitionTime": "2025-03-02T17:04:30Z",
                 "reason": "Succeeded", "message": "JetStream is deployed"},
                {"type": "Ready", "status": ready, "lastTransitionTime": "2025-03-02T17:04:30Z"},
            ],
            "config": {"jetstream": {"url": "nats://eventbus-default-js-svc:4222"}},
        },
    })
}

pub fn raw_argo_rollout(phase: &str) -> serde_json::Value {
    json!({
        "apiVersion": "argoproj.io/v1alpha1",
        "kind": "Rollout",
        "metadata": raw_metadata(),
        "spec": {
            "replicas": 5,
            "selector": {"matchLabels": {"app": "rollouts-demo"}},
            "strategy": {"canary": {"steps": [{"setWeight": 20}, {"pause": {}}]}},
        },
        "status": {
            "phase": phase,
            "observedGeneration": "2",
            "replicas": 5,
            "readyReplicas": 5,
            "updatedReplicas": 5,
            "availableReplicas": 5,
            "currentStepIndex": 2,
            "currentPodHash": "687d76d795",
            "stableRS": "687d76d795",
            "conditions": [{
                "type": "Progressing",
                "status": "True",
                "reason": "NewReplicaSetAvailable",
                "message": "Rollout \"rollouts-demo\" has successfully progressed.",
                "lastUpdateTime": "2025-03-02T17:06:01Z",
                "lastTransitionTime": "2025-03-02T17:04:20Z",
            }],
        },
    })
}

pub fn raw_argo_workflow(phase: &str) -> serde_json::Value {
    json!({
        "apiVersion": "argoproj.io/v1alpha1",
        "kind": "Workflow",
        "metadata": raw_metadata(),
        "spec": {
            "entrypoint": "whalesay",
            "templates": [{"name": "whalesay", "container": {"image": "docker/whalesay", "command": ["cowsay"]}}],
        },
        "status": {
            "phase": phase,
            "startedAt": "2025-03-02T17:04:11Z",
            "finishedAt": "2025-03-02T17:04:41Z",
            "progress": "1/1",
            "nodes": {TEST_NAME: {"id": TEST_NAME, "type": "Pod", "phase": phase}},
            "conditions": [{"type": "PodRunning", "status": "False"}, {"type": "Completed", "status": "True"}],
            "resourcesDuration": {"cpu": 1, "memory": 3},
        },
    })
}

pub fn raw_cert_manager_order(state: &str) -> serde_json::Value {
    json!({
        "apiVersion": "acme.cert-manager.io/v1",
        "kind": "Order",
        "metadata": raw_metadata(),
        "spec": {
            "request": "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURSBSRVFVRVNULS0tLS0K",
            "issuerRef": {"name": "letsencrypt-staging", "kind": "ClusterIssuer", "group": "cert-manager.io"},
            "commonName": "example.com",
            "dnsNames": ["example.com", "www.example.com"],
        },
        "status": {
            "state": state,
            "url": "https://acme-staging-v02.api.letsencrypt.org/acme/order/1234/5678",
            "finalizeURL": "https://acme-staging-v02.api.letsencrypt.org/acme/finalize/1234/5678",
            "authorizations": [{
                "url": "https://acme-staging-v02.api.letsencrypt.org/acme/authz-v3/91011",
                "identifier": "example.com",
                "initialState": "pending",
                "wildcard": false,
            }],
        },
    })
}

pub fn raw_external_secret(ready: &str) -> serde_json::Value {
    json!({
        "apiVersion": "external-secrets.io/v1",
        "kind": "ExternalSecret",
        "metadata": raw_metadata(),
        "spec": {
            "refreshInterval": "1h",
            "secretStoreRef": {"name": "vault-backend", "kind": "ClusterSecretStore"},
            "target": {"name": TEST_SECRET_NAME, "creationPolicy": "Owner"},
            "data": [{"secretKey": "password", "remoteRef": {"key": "db", "property": "password"}}],
        },
        "status": {
            "binding": {"name": TEST_SECRET_NAME},
            "conditions": [{
                "type": "Ready",
                "status": ready,
                "reason": "SecretSynced",
                "message": "secret synced",
                "lastTransitionTime": "2025-03-02T17:04:15Z",
            }],
            "refreshTime": "2025-03-02T17:04:15Z",
            "syncedResourceVersion": "1-0b9c5d9e7e2f4a6b",
        },
    })
}

pub fn raw_flux_kustomization(ready: &str) -> serde_json::Value {
    json!({
        "apiVersion": "kustomize.toolkit.fluxcd.io/v1",
        "kind": "Kustomization",
        "metadata": raw_metadata(),
        "spec": {
            "interval": "10m",
            "path": "./kustomize",
            "prune": true,
            "sourceRef": {"kind": "GitRepository", "name": "podinfo"},
            "targetNamespace": "default",
            "timeout": "1m",
        },
        "status": {
            "conditions": [{
                "type": "Ready",
                "status": ready,
                "observedGeneration": 2,
                "reason": "ReconciliationSucceeded",
                "message": "Applied revision: master@sha1:0eb2d1b5",
                "lastTransitionTime": "2025-03-02T17:04:18Z",
            }],
            "inventory": {"entries": [{"id": "default_podinfo__Service", "v": "v1"}]},
            "lastAppliedRevision": "master@sha1:0eb2d1b5",
            "lastAttemptedRevision": "master@sha1:0eb2d1b5",
            "observedGeneration": 2,
        },
    })
}

pub fn raw_istio_virtual_service(ready: &str) -> serde_json::Value {
    json!({
        "apiVersion": "networking.istio.io/v1alpha3",
        "kind": "VirtualService",
        "metadata": raw_metadata(),
        "spec": {
            "hosts": ["reviews"],
            "http": [{"route": [{"destination": {"host": "reviews", "subset": "v1"}}]}],
        },
        "status": {
            "conditions": [{
                "type": "Reconciled",
                "status": ready,
                "lastProbeTime": "2025-03-02T17:04:20Z",
                "lastTransitionTime": "2025-03-02T17:04:20Z",
                "message": "Resource reconciled",
                "observedGeneration": "2",
            }, {
                "type": "Ready",
                "status": ready,
                "observedGeneration": "2",
            }],
            "observedGeneration": "2",
            "validationMessages": [{"type": {"code": "IST0101", "name": "ReferencedResourceNotFound"}}],
        },
    })
}

pub fn raw_linkerd_http_route() -> serde_json::Value {
    json!({
        "apiVersion": "policy.linkerd.io/v1alpha1",
        "kind": "HTTPRoute",
        "metadata": raw_metadata(),
        "spec": {
            "parentRefs": [
                {"name": "web-gateway", "namespace": TEST_NAMESPACE},
                {"group": "policy.linkerd.io", "kind": "Server", "name": "web-http", "port": 8080},
            ],
            "hostnames": ["web.example.com"],
            "rules": [{"matches": [{"path": {"type": "PathPrefix", "value": "/"}}]}],
        },
        "status": {
            "parents": [{
                "parentRef": {"group": "policy.linkerd.io", "kind": "Server", "name": "web-http"},
                "controllerName": "linkerd.io/policy-controller",
                "conditions": [{"type": "Accepted", "status": "True", "reason": "Accepted"}],
            }],
        },
    })
}

pub fn raw_linkerd_server_authorization() -> serde_json::Value {
    json!({
        "apiVersion": "policy.linkerd.io/v1beta1",
        "kind": "ServerAuthorization",
        "metadata": raw_metadata(),
        "spec": {
            "server": {"name": "web-http"},
            "client": {"meshTLS": {"serviceAccounts": [{"name": "web", "namespace": TEST_NAMESPACE}]}},
        },
    })
}

pub fn raw_linkerd_service_profile() -> serde_json::Value {
    json!({
        "apiVersion": "linkerd.io/v1alpha2",
        "kind": "ServiceProfile",
        "metadata": raw_metadata(),
        "spec": {
            "routes": [{"name": "GET /books", "condition": {"method": "GET", "pathRegex": "/books"}}],
            "retryBudget": {"retryRatio": 0.2, "minRetriesPerSecond": 10, "ttl": "10s"},
            "opaquePorts": {"3306": {}, "5432": {}},
        },
    })
}

pub fn raw_velero_backup(phase: &str) -> serde_json::Value {
    json!({
        "apiVersion": "velero.io/v1",
        "kind": "Backup",
        "metadata": raw_metadata(),
        "spec": {
            "includedNamespaces": ["app"],
            "storageLocation": "default",
            "ttl": "720h0m0s",
            "defaultVolumesToFsBackup": false,
        },
        "status": {
            "phase": phase,
            "version": 1,
            "formatVersion": "1.1.0",
            "expiration": "2025-04-01T17:04:11Z",
            "startTimestamp": "2025-03-02T17:04:11Z",
            "completionTimestamp": "2025-03-02T17:04:49Z",
            "progress": {"totalItems": 42, "itemsBackedUp": 42},
            "warnings": 1,
        },
    })
}
