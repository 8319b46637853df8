use ec2_inventory_common::{
    ErrorBody, InstanceListBody, InstanceRecord, InstanceTag, SecurityGroupRef,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::instances::list_instances),
    components(
        schemas(
            InstanceListBody,
            InstanceRecord,
            InstanceTag,
            SecurityGroupRef,
            ErrorBody
        )
    ),
    tags(
        (name = "Instances", description = "EC2 instance inventory")
    )
)]
pub struct ApiDoc;
