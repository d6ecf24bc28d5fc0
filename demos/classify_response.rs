use serde_json::Value;
use tke_error_codes::{definitions, Action, ApiError, ErrorLedger, Lookup};

/// Responses as the service returns them for a failed call.
const RESPONSES: &[(Action, &str)] = &[
    (
        Action::DescribeClusterNodePools,
        r#"{"Response":{"Error":{"Code":"ResourceNotFound.ClusterNotFound","Message":"cluster cls-8x2k not found"},"RequestId":"4f1d2c3b-0a9e-4b8d-9c7f-1e2d3c4b5a69"}}"#,
    ),
    (
        Action::ModifyClusterAsGroupAttribute,
        r#"{"Response":{"Error":{"Code":"InternalError.UnexceptedInternal","Message":"internal error"},"RequestId":"8a7b6c5d-4e3f-4a1b-8c9d-0e1f2a3b4c5d"}}"#,
    ),
    (
        Action::DescribeClusterAsGroups,
        r#"{"Response":{"Error":{"Code":"InternalError.VpcRecodrNotFound","Message":"vpc record missing"},"RequestId":"1b2c3d4e-5f60-4718-89ab-cdef01234567"}}"#,
    ),
    (
        Action::DeleteClusterInstances,
        r#"{"Response":{"Error":{"Code":"SomeNewCode.Whatever","Message":"something new"},"RequestId":"abcdef01-2345-4678-9abc-def012345678"}}"#,
    ),
    (
        Action::DescribeClusterInstances,
        r#"{"Response":{"Error":{"Code":"ResourceUnavailable.ClusterState","Message":"cluster is upgrading"},"RequestId":"0f1e2d3c-4b5a-4697-8877-665544332211"}}"#,
    ),
];

fn parse(action: Action, body: &str) -> Option<ApiError> {
    let value: Value = serde_json::from_str(body).ok()?;
    let response = value.get("Response")?;
    let error = response.get("Error")?;
    let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_owned();

    Some(
        ApiError::new(
            text(error.get("Code")),
            text(error.get("Message")),
            text(response.get("RequestId")),
        )
        .with_action(action),
    )
}

fn main() {
    println!("--- Classifying service errors ---\n");

    let ledger = ErrorLedger::new(16, 256);

    for (action, body) in RESPONSES {
        let Some(err) = parse(*action, body) else {
            println!("unparseable response for {}", action);
            continue;
        };

        println!("{}", err);
        println!("  log:        {}", err.log());

        match err.lookup() {
            Lookup::Known(code) => {
                println!("  symbol:     {}", code.symbol());
                println!("  class:      {}", code.failure_class());
                println!("  documented: {}", action.documents(code));
                if code == &definitions::RESOURCEUNAVAILABLE_CLUSTERSTATE {
                    println!("  -> cluster busy, retry the scale-up later");
                } else if code.failure_class().may_succeed_on_retry() {
                    println!("  -> may succeed on retry");
                }
            }
            Lookup::Unknown(raw) => {
                println!("  not in catalog: '{}'", raw);
                match err.category() {
                    Some(category) => println!("  category prefix: {}", category),
                    None => println!("  category prefix: unknown"),
                }
            }
        }
        println!();

        ledger.record(&err);
    }

    println!("Recorded {} errors, {} unrecognised.", ledger.len(), ledger.get_filtered(|e| !e.recognized).len());
    for count in ledger.counts() {
        println!("  {:<40} {}", count.code, count.count);
    }
}
