//! Simulated AWS resource records

use serde::{Deserialize, Serialize};

/// Region every simulated resource lives in
pub const DEFAULT_REGION: &str = "us-east-1";

/// Account id embedded in fabricated ARNs
pub const DEMO_ACCOUNT_ID: &str = "123456789012";

/// Resource type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "EC2 Instance")]
    Ec2Instance,
    #[serde(rename = "S3 Bucket")]
    S3Bucket,
    #[serde(rename = "S3 Object")]
    S3Object,
    #[serde(rename = "Lambda Function")]
    LambdaFunction,
    #[serde(rename = "CloudWatch Alarm")]
    CloudWatchAlarm,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Ec2Instance => "EC2 Instance",
            ResourceKind::S3Bucket => "S3 Bucket",
            ResourceKind::S3Object => "S3 Object",
            ResourceKind::LambdaFunction => "Lambda Function",
            ResourceKind::CloudWatchAlarm => "CloudWatch Alarm",
        };
        f.write_str(name)
    }
}

/// Type-specific attributes of a simulated resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResourceDetails {
    #[serde(rename = "EC2 Instance")]
    Ec2Instance {
        instance_type: String,
        ami_id: String,
        state: String,
        region: String,
    },
    #[serde(rename = "S3 Bucket")]
    S3Bucket {
        name: String,
        region: String,
        versioning: String,
        encryption: String,
    },
    #[serde(rename = "S3 Object")]
    S3Object {
        bucket: String,
        key: String,
        size: usize,
        content_type: String,
    },
    #[serde(rename = "Lambda Function")]
    LambdaFunction {
        name: String,
        runtime: String,
        memory: String,
        timeout: String,
        state: String,
    },
    #[serde(rename = "CloudWatch Alarm")]
    CloudWatchAlarm {
        metric: String,
        threshold: String,
        period: String,
        state: String,
    },
}

/// A fabricated cloud resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedResource {
    pub id: String,
    #[serde(flatten)]
    pub details: ResourceDetails,
}

impl SimulatedResource {
    pub fn kind(&self) -> ResourceKind {
        match self.details {
            ResourceDetails::Ec2Instance { .. } => ResourceKind::Ec2Instance,
            ResourceDetails::S3Bucket { .. } => ResourceKind::S3Bucket,
            ResourceDetails::S3Object { .. } => ResourceKind::S3Object,
            ResourceDetails::LambdaFunction { .. } => ResourceKind::LambdaFunction,
            ResourceDetails::CloudWatchAlarm { .. } => ResourceKind::CloudWatchAlarm,
        }
    }
}

/// AWS service an operation was issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwsService {
    #[serde(rename = "EC2")]
    Ec2,
    S3,
    Lambda,
    CloudWatch,
}

impl std::fmt::Display for AwsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwsService::Ec2 => write!(f, "EC2"),
            AwsService::S3 => write!(f, "S3"),
            AwsService::Lambda => write!(f, "Lambda"),
            AwsService::CloudWatch => write!(f, "CloudWatch"),
        }
    }
}

/// One entry of the simulated operation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationLogEntry {
    pub timestamp: String,
    pub service: AwsService,
    pub action: String,
    pub resource_id: String,
    pub status: String,
}

/// Result of terminating an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Termination {
    pub status: String,
    pub instance_id: String,
}
