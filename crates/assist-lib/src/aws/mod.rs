//! Simulated AWS provisioning assistant
//!
//! This module provides:
//! - Fabricated resource records (EC2, S3, Lambda, CloudWatch)
//! - An append-only provisioning recorder with an operation log
//! - A catalog of natural-language workflow walkthroughs

mod provisioner;
mod resources;
pub mod workflows;

pub use provisioner::{
    AwsProvisioner, ProvisioningSummary, DEFAULT_AMI_ID, DEFAULT_INSTANCE_TYPE,
    DEFAULT_LAMBDA_RUNTIME, DEFAULT_OBJECT_CONTENT, STATUS_SUCCESS,
};
pub use resources::{
    AwsService, OperationLogEntry, ResourceDetails, ResourceKind, SimulatedResource, Termination,
    DEFAULT_REGION, DEMO_ACCOUNT_ID,
};
pub use workflows::WorkflowExample;
