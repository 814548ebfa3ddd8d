use kw_api::flux::*;

use crate::conditions::has_true_condition;
use crate::macros::*;
use crate::prelude::*;

impl_ready_from_condition!(
    READY_CONDITION => GitRepository,
    HelmRepository,
    HelmChart,
    Bucket,
    OCIRepository,
    Kustomization,
    HelmRelease,
);

namespaced_ready_helpers! {
    Bucket: bucket, buckets;
    GitRepository: git_repository, git_repositories;
    HelmRepository: helm_repository, helm_repositories;
    HelmChart: helm_chart, helm_charts;
    OCIRepository: oci_repository, oci_repositories;
    Kustomization: kustomization, kustomizations;
    HelmRelease: helm_release, helm_releases;
}

pub fn has_ready_condition(conds: &[Condition]) -> bool {
    has_true_condition(conds, READY_CONDITION)
}
