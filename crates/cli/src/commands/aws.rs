//! AWS provisioning walkthrough and workflow catalog

use anyhow::Result;
use assist_lib::aws::{
    workflows, AwsProvisioner, ResourceDetails, SimulatedResource, DEFAULT_INSTANCE_TYPE,
    DEFAULT_LAMBDA_RUNTIME, DEFAULT_OBJECT_CONTENT,
};
use colored::Colorize;
use serde_json::json;

use crate::output::{
    color_state, print_banner, print_info, print_json, print_section, print_success, print_table,
    print_warning, CountRow, OutputFormat,
};

const WIDTH: usize = 80;
const WORKFLOW_WIDTH: usize = 100;
const DEMO_BUCKET: &str = "mcp-demo-bucket-2026";
const DEMO_OBJECT_KEY: &str = "demo-data.txt";
const DEMO_FUNCTION: &str = "data-processor-function";

/// Run the provisioning walkthrough
pub fn run(format: OutputFormat) -> Result<()> {
    let mut provisioner = AwsProvisioner::new();
    let narrate = format.is_table();

    if narrate {
        print_banner(
            "MCP SERVER FOR AWS - AUTOMATED RESOURCE PROVISIONING DEMO",
            WIDTH,
        );
        print_section("Query 1: Create an EC2 instance", WIDTH);
    }
    let instance = provisioner.provision_ec2_instance(DEFAULT_INSTANCE_TYPE, None);
    if narrate {
        describe(&instance, "EC2 Instance created");
        println!();
        print_section("Query 2: Create S3 bucket and upload data", WIDTH);
    }

    let bucket = provisioner.create_s3_bucket(DEMO_BUCKET);
    let object = provisioner.upload_to_s3(DEMO_BUCKET, DEMO_OBJECT_KEY, DEFAULT_OBJECT_CONTENT);
    if narrate {
        describe(&bucket, "S3 Bucket created");
        describe(&object, "Object uploaded");
        println!();
        print_section("Query 3: Deploy Lambda function", WIDTH);
    }

    let function = provisioner.deploy_lambda_function(DEMO_FUNCTION, DEFAULT_LAMBDA_RUNTIME);
    if narrate {
        describe(&function, "Lambda Function deployed");
        println!();
        print_section("Query 4: Setup CloudWatch monitoring", WIDTH);
    }

    let alarm = provisioner.setup_cloudwatch_monitoring("EC2", &instance.id);
    if narrate {
        describe(&alarm, "CloudWatch Alarm created");
        println!();
        print_automation_summary(&provisioner);
        Ok(())
    } else {
        print_json(&json!({
            "summary": provisioner.summary(),
            "records": provisioner,
        }))
    }
}

/// Print the workflow catalog
pub fn run_workflows(format: OutputFormat) -> Result<()> {
    let catalog = workflows::catalog();

    if !format.is_table() {
        return print_json(catalog);
    }

    print_banner("MCP FOR AWS: NATURAL LANGUAGE TO AWS AUTOMATION", WORKFLOW_WIDTH);

    for (i, example) in catalog.iter().enumerate() {
        print_banner(
            &format!(
                "EXAMPLE {}: {}",
                i + 1,
                example.natural_language.to_uppercase()
            ),
            WORKFLOW_WIDTH,
        );

        print_info("User Input (Natural Language):");
        println!("   \"{}\"", example.natural_language);
        println!();

        print_success("MCP Automated Workflow:");
        for step in example.automated_steps {
            println!("   {}", step);
        }
        println!();

        print_warning("Traditional Manual Process (Without MCP):");
        for command in example.traditional_commands {
            println!("   $ {}", command.dimmed());
        }
        println!();

        println!("Time Savings: {}", example.time_saved.green().bold());
        println!();
    }

    Ok(())
}

/// Narrate one created resource
fn describe(resource: &SimulatedResource, headline: &str) {
    match &resource.details {
        ResourceDetails::Ec2Instance {
            instance_type,
            ami_id,
            state,
            ..
        } => {
            print_success(&format!("{}: {}", headline, resource.id.cyan()));
            println!(
                "   Type: {}, AMI: {}, State: {}",
                instance_type,
                ami_id,
                color_state(state)
            );
        }
        ResourceDetails::S3Bucket {
            name,
            region,
            encryption,
            ..
        } => {
            print_success(&format!("{}: {}", headline, name.cyan()));
            println!("   Region: {}, Encryption: {}", region, encryption);
        }
        ResourceDetails::S3Object {
            key,
            size,
            content_type,
            ..
        } => {
            print_success(&format!("{}: {}", headline, key.cyan()));
            println!("   Size: {} bytes, Type: {}", size, content_type);
        }
        ResourceDetails::LambdaFunction {
            name,
            runtime,
            memory,
            state,
            ..
        } => {
            print_success(&format!("{}: {}", headline, name.cyan()));
            println!(
                "   Runtime: {}, Memory: {}, State: {}",
                runtime,
                memory,
                color_state(state)
            );
        }
        ResourceDetails::CloudWatchAlarm {
            metric,
            threshold,
            state,
            ..
        } => {
            print_success(&format!("{}: {}", headline, resource.id.cyan()));
            println!(
                "   Metric: {}, Threshold: {}, State: {}",
                metric,
                threshold,
                color_state(state)
            );
        }
    }
}

fn print_automation_summary(provisioner: &AwsProvisioner) {
    let summary = provisioner.summary();

    print_banner("AUTOMATION SUMMARY", WIDTH);
    print_table(vec![
        CountRow::new("Total Resources Created", summary.total_resources),
        CountRow::new("EC2 Instances", summary.ec2_instances),
        CountRow::new("S3 Buckets", summary.s3_buckets),
        CountRow::new("Lambda Functions", summary.lambda_functions),
        CountRow::new("Total Operations", summary.total_operations),
    ]);
    println!();
}
