//! Simulated AWS provisioning recorder
//!
//! Nothing here talks to AWS. Each call fabricates a resource record with
//! a plausible identifier, appends it, and writes an operation log entry.

use serde::Serialize;

use super::resources::{
    AwsService, OperationLogEntry, ResourceDetails, ResourceKind, SimulatedResource, Termination,
    DEFAULT_REGION, DEMO_ACCOUNT_ID,
};
use crate::clock::{Clock, SystemClock};
use crate::observability::{AssistantMetrics, StructuredLogger};

/// AMI used when none is requested
pub const DEFAULT_AMI_ID: &str = "ami-0c55b159cbfafe1f0";

/// Default EC2 instance type
pub const DEFAULT_INSTANCE_TYPE: &str = "t2.micro";

/// Default Lambda runtime
pub const DEFAULT_LAMBDA_RUNTIME: &str = "python3.12";

/// Body uploaded when the caller supplies none
pub const DEFAULT_OBJECT_CONTENT: &str = "Demo content";

/// Status written for operations that need no follow-up
pub const STATUS_SUCCESS: &str = "Success";

/// Aggregate counts over the provisioner's lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProvisioningSummary {
    pub total_resources: usize,
    pub ec2_instances: usize,
    pub s3_buckets: usize,
    pub lambda_functions: usize,
    pub total_operations: usize,
}

/// In-memory AWS provisioning assistant
#[derive(Serialize)]
pub struct AwsProvisioner {
    #[serde(skip)]
    clock: Box<dyn Clock>,
    #[serde(skip)]
    logger: StructuredLogger,
    #[serde(skip)]
    metrics: AssistantMetrics,
    resources: Vec<SimulatedResource>,
    operations: Vec<OperationLogEntry>,
}

impl Default for AwsProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsProvisioner {
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
            logger: StructuredLogger::new("aws-provisioner"),
            metrics: AssistantMetrics::new(),
            resources: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Use a different time source for identifiers and timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Append an entry to the operation log
    pub fn log_operation(
        &mut self,
        service: AwsService,
        action: &str,
        resource_id: &str,
        status: &str,
    ) -> &OperationLogEntry {
        let entry = OperationLogEntry {
            timestamp: self.clock.log_timestamp(),
            service,
            action: action.to_string(),
            resource_id: resource_id.to_string(),
            status: status.to_string(),
        };
        self.logger
            .log_operation(&service.to_string(), action, resource_id, status);
        self.operations.push(entry);
        &self.operations[self.operations.len() - 1]
    }

    pub fn provision_ec2_instance(
        &mut self,
        instance_type: &str,
        ami_id: Option<&str>,
    ) -> SimulatedResource {
        let instance_id = format!("i-{}", self.clock.id_stamp());
        let resource = SimulatedResource {
            id: instance_id.clone(),
            details: ResourceDetails::Ec2Instance {
                instance_type: instance_type.to_string(),
                ami_id: ami_id.unwrap_or(DEFAULT_AMI_ID).to_string(),
                state: "running".to_string(),
                region: DEFAULT_REGION.to_string(),
            },
        };

        self.push_resource(resource.clone());
        self.log_operation(AwsService::Ec2, "CREATE", &instance_id, STATUS_SUCCESS);
        resource
    }

    pub fn create_s3_bucket(&mut self, bucket_name: &str) -> SimulatedResource {
        let resource = SimulatedResource {
            id: format!("arn:aws:s3:::{}", bucket_name),
            details: ResourceDetails::S3Bucket {
                name: bucket_name.to_string(),
                region: DEFAULT_REGION.to_string(),
                versioning: "Enabled".to_string(),
                encryption: "AES256".to_string(),
            },
        };

        self.push_resource(resource.clone());
        self.log_operation(AwsService::S3, "CREATE_BUCKET", bucket_name, STATUS_SUCCESS);
        resource
    }

    /// Upload an object; its size is the content length in characters
    pub fn upload_to_s3(
        &mut self,
        bucket_name: &str,
        object_key: &str,
        content: &str,
    ) -> SimulatedResource {
        let object_id = format!("s3://{}/{}", bucket_name, object_key);
        let resource = SimulatedResource {
            id: object_id.clone(),
            details: ResourceDetails::S3Object {
                bucket: bucket_name.to_string(),
                key: object_key.to_string(),
                size: content.chars().count(),
                content_type: "text/plain".to_string(),
            },
        };

        self.push_resource(resource.clone());
        self.log_operation(AwsService::S3, "UPLOAD_OBJECT", &object_id, STATUS_SUCCESS);
        resource
    }

    pub fn deploy_lambda_function(&mut self, function_name: &str, runtime: &str) -> SimulatedResource {
        let resource = SimulatedResource {
            id: format!(
                "arn:aws:lambda:{}:{}:function:{}",
                DEFAULT_REGION, DEMO_ACCOUNT_ID, function_name
            ),
            details: ResourceDetails::LambdaFunction {
                name: function_name.to_string(),
                runtime: runtime.to_string(),
                memory: "128 MB".to_string(),
                timeout: "30s".to_string(),
                state: "Active".to_string(),
            },
        };

        self.push_resource(resource.clone());
        self.log_operation(
            AwsService::Lambda,
            "CREATE_FUNCTION",
            function_name,
            STATUS_SUCCESS,
        );
        resource
    }

    /// Create a CPU alarm for an existing resource
    pub fn setup_cloudwatch_monitoring(
        &mut self,
        resource_type: &str,
        resource_id: &str,
    ) -> SimulatedResource {
        let alarm_name = format!("{}-{}-alarm", resource_type, resource_id);
        let resource = SimulatedResource {
            id: alarm_name.clone(),
            details: ResourceDetails::CloudWatchAlarm {
                metric: format!("{}CPUUtilization", resource_type),
                threshold: "80%".to_string(),
                period: "5 minutes".to_string(),
                state: "OK".to_string(),
            },
        };

        self.push_resource(resource.clone());
        self.log_operation(
            AwsService::CloudWatch,
            "CREATE_ALARM",
            &alarm_name,
            STATUS_SUCCESS,
        );
        resource
    }

    /// Terminate an instance. Only the operation log changes; the
    /// resource list is append-only.
    pub fn terminate_ec2_instance(&mut self, instance_id: &str) -> Termination {
        self.log_operation(AwsService::Ec2, "TERMINATE", instance_id, STATUS_SUCCESS);
        Termination {
            status: "terminated".to_string(),
            instance_id: instance_id.to_string(),
        }
    }

    pub fn summary(&self) -> ProvisioningSummary {
        ProvisioningSummary {
            total_resources: self.resources.len(),
            ec2_instances: self.count(ResourceKind::Ec2Instance),
            s3_buckets: self.count(ResourceKind::S3Bucket),
            lambda_functions: self.count(ResourceKind::LambdaFunction),
            total_operations: self.operations.len(),
        }
    }

    pub fn resources(&self) -> &[SimulatedResource] {
        &self.resources
    }

    pub fn operations(&self) -> &[OperationLogEntry] {
        &self.operations
    }

    fn count(&self, kind: ResourceKind) -> usize {
        self.resources.iter().filter(|r| r.kind() == kind).count()
    }

    fn push_resource(&mut self, resource: SimulatedResource) {
        let kind = resource.kind().to_string();
        self.logger.log_artifact(&kind, &resource.id);
        self.metrics.inc_artifact(&kind);
        self.resources.push(resource);
    }
}
