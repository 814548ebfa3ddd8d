use std::time::Duration;

use kw_api::argo::workflows::*;
use tracing::*;

use crate::prelude::*;
use crate::wait::{
    list_cluster,
    list_namespaced,
    wait_for,
};

pub fn workflow_in_phase(wf: &Workflow, phase: WorkflowPhase) -> bool {
    let current = wf.status.as_ref().and_then(|s| s.phase.as_deref());
    debug!("{}: phase={current:?}, want {phase}", wf.namespaced_name());
    current == Some(phase.as_str())
}

pub fn cron_workflow_in_phase(cwf: &CronWorkflow, phase: CronWorkflowPhase) -> bool {
    cwf.status.as_ref().is_some_and(|s| s.phase_is(phase))
}

pub async fn list_workflows(client: kube::Client, ns: &str) -> anyhow::Result<Vec<Workflow>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_workflow_phase(
    client: kube::Client,
    ns: &str,
    name: &str,
    phase: WorkflowPhase,
    timeout: Duration,
) -> anyhow::Result<Workflow> {
    let api = kube::Api::<Workflow>::namespaced(client, ns);
    wait_for(&api, name, &WaitOptions::with_timeout(timeout), |wf| workflow_in_phase(wf, phase)).await
}

macro_rules! workflow_phase_shortcuts {
    ($($fn_name:ident => $phase:ident,)+) => {
        $(
            pub async fn $fn_name(client: kube::Client, ns: &str, name: &str, timeout: Duration) -> anyhow::Result<Workflow> {
                wait_for_workflow_phase(client, ns, name, WorkflowPhase::$phase, timeout).await
            }
        )+
    };
}

workflow_phase_shortcuts! {
    wait_for_workflow_pending => Pending,
    wait_for_workflow_running => Running,
    wait_for_workflow_succeeded => Succeeded,
    wait_for_workflow_failed => Failed,
    wait_for_workflow_error => Error,
}

pub async fn list_cron_workflows(client: kube::Client, ns: &str) -> anyhow::Result<Vec<CronWorkflow>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn wait_for_cron_workflow_phase(
    client: kube::Client,
    ns: &str,
    name: &str,
    phase: CronWorkflowPhase,
    timeout: Duration,
) -> anyhow::Result<CronWorkflow> {
    let api = kube::Api::<CronWorkflow>::namespaced(client, ns);
    wait_for(&api, name, &WaitOptions::with_timeout(timeout), |cwf| cron_workflow_in_phase(cwf, phase)).await
}

pub async fn wait_for_cron_workflow_active(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<CronWorkflow> {
    wait_for_cron_workflow_phase(client, ns, name, CronWorkflowPhase::Active, timeout).await
}

pub async fn wait_for_cron_workflow_stopped(
    client: kube::Client,
    ns: &str,
    name: &str,
    timeout: Duration,
) -> anyhow::Result<CronWorkflow> {
    wait_for_cron_workflow_phase(client, ns, name, CronWorkflowPhase::Stopped, timeout).await
}

pub async fn list_workflow_templates(client: kube::Client, ns: &str) -> anyhow::Result<Vec<WorkflowTemplate>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn list_cluster_workflow_templates(client: kube::Client) -> anyhow::Result<Vec<ClusterWorkflowTemplate>> {
    list_cluster(client, &ListParams::default()).await
}

pub async fn list_workflow_task_results(client: kube::Client, ns: &str) -> anyhow::Result<Vec<WorkflowTaskResult>> {
    list_namespaced(client, ns, &ListParams::default()).await
}

pub async fn list_workflow_task_sets(client: kube::Client, ns: &str) -> anyhow::Result<Vec<WorkflowTaskSet>> {
    list_namespaced(client, ns, &ListParams::default()).await
}
