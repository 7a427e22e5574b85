//! Catalog of natural-language to AWS workflow walkthroughs

use serde::Serialize;

/// One natural-language request with the automated and manual paths to fulfil it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkflowExample {
    pub natural_language: &'static str,
    pub automated_steps: &'static [&'static str],
    pub traditional_commands: &'static [&'static str],
    pub time_saved: &'static str,
}

const WORKFLOWS: [WorkflowExample; 4] = [
    WorkflowExample {
        natural_language: "Create an EC2 instance for web hosting",
        automated_steps: &[
            "1. MCP Server receives natural language command",
            "2. AI Agent parses intent: 'create EC2' + 'web hosting'",
            "3. MCP invokes AWS SDK: boto3.client('ec2').run_instances()",
            "4. Parameters auto-selected: t2.micro, web security group, HTTP/HTTPS ports",
            "5. Instance provisioned with ID: i-0123456789abcdef0",
            "6. Response returned to user with instance details",
        ],
        traditional_commands: &[
            "aws ec2 describe-images --filters 'Name=name,Values=amzn2-ami-*'",
            "aws ec2 describe-security-groups",
            "aws ec2 run-instances --image-id ami-xxx --instance-type t2.micro --key-name mykey --security-group-ids sg-xxx",
            "aws ec2 describe-instances --instance-ids i-xxx",
            "aws ec2 create-tags --resources i-xxx --tags Key=Name,Value=WebServer",
        ],
        time_saved: "5 commands → 1 natural language query (90% time reduction)",
    },
    WorkflowExample {
        natural_language: "Setup S3 bucket with versioning and lifecycle policies",
        automated_steps: &[
            "1. MCP parses requirements: S3 + versioning + lifecycle",
            "2. AWS SDK creates bucket: boto3.client('s3').create_bucket()",
            "3. Enables versioning automatically",
            "4. Applies lifecycle rule: move to Glacier after 90 days",
            "5. Sets encryption: AES256",
            "6. Configures access logging",
        ],
        traditional_commands: &[
            "aws s3 mb s3://my-bucket --region us-east-1",
            "aws s3api put-bucket-versioning --bucket my-bucket --versioning-configuration Status=Enabled",
            "aws s3api put-bucket-encryption --bucket my-bucket --server-side-encryption-configuration {...}",
            "aws s3api put-bucket-lifecycle-configuration --bucket my-bucket --lifecycle-configuration {...}",
            "aws s3api put-bucket-logging --bucket my-bucket --bucket-logging-status {...}",
        ],
        time_saved: "5+ commands → 1 natural language query (85% time reduction)",
    },
    WorkflowExample {
        natural_language: "Deploy a Python Lambda function for data processing",
        automated_steps: &[
            "1. MCP identifies Lambda deployment requirement",
            "2. Creates IAM execution role with necessary permissions",
            "3. Packages Python code into deployment package",
            "4. Uploads to Lambda: boto3.client('lambda').create_function()",
            "5. Configures memory (512MB) and timeout (5min)",
            "6. Sets up CloudWatch log group",
            "7. Creates trigger (S3 event or API Gateway)",
        ],
        traditional_commands: &[
            "aws iam create-role --role-name lambda-execution-role --assume-role-policy-document {...}",
            "aws iam attach-role-policy --role-name lambda-execution-role --policy-arn {...}",
            "zip -r function.zip lambda_function.py",
            "aws lambda create-function --function-name my-func --runtime python3.12 --role arn:... --handler lambda_function.handler --zip-file fileb://function.zip",
            "aws lambda update-function-configuration --function-name my-func --memory-size 512 --timeout 300",
            "aws logs create-log-group --log-group-name /aws/lambda/my-func",
            "aws lambda add-permission --function-name my-func --statement-id s3-trigger --action lambda:InvokeFunction --principal s3.amazonaws.com",
        ],
        time_saved: "7+ commands → 1 natural language query (95% time reduction)",
    },
    WorkflowExample {
        natural_language: "Monitor all EC2 instances with high CPU alert",
        automated_steps: &[
            "1. MCP identifies monitoring requirement",
            "2. Lists all EC2 instances in account",
            "3. For each instance, creates CloudWatch alarm",
            "4. Sets metric: CPUUtilization > 80%",
            "5. Configures SNS notification",
            "6. Creates dashboard for visualization",
        ],
        traditional_commands: &[
            "aws ec2 describe-instances --query 'Reservations[*].Instances[*].InstanceId' --output text",
            "For each instance:",
            "  aws cloudwatch put-metric-alarm --alarm-name i-xxx-cpu --alarm-description 'High CPU' --metric-name CPUUtilization --namespace AWS/EC2 --statistic Average --period 300 --threshold 80 --comparison-operator GreaterThanThreshold --dimensions Name=InstanceId,Value=i-xxx --evaluation-periods 2 --alarm-actions arn:aws:sns:...",
            "aws sns create-topic --name ec2-alerts",
            "aws sns subscribe --topic-arn arn:... --protocol email --notification-endpoint admin@example.com",
        ],
        time_saved: "Multiple iterations → 1 natural language query (92% time reduction)",
    },
];

/// All workflow walkthroughs, in presentation order
pub fn catalog() -> &'static [WorkflowExample] {
    &WORKFLOWS
}
