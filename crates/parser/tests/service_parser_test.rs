//! Integration tests for parsing individual botocore documents

use botodocs_common::DocgenError;
use botodocs_parser::ServiceParser;

const SERVICE: &str = r#"{
    "metadata": {
        "apiVersion": "2015-03-31",
        "endpointPrefix": "lambda",
        "serviceFullName": "AWS Lambda",
        "serviceId": "Lambda"
    },
    "operations": {
        "Invoke": {
            "input": {"shape": "InvocationRequest"},
            "output": {"shape": "InvocationResponse"}
        }
    },
    "shapes": {
        "InvocationRequest": {
            "type": "structure",
            "required": ["FunctionName"],
            "members": {
                "FunctionName": {"shape": "NamespacedFunctionName"},
                "Payload": {"shape": "Blob"}
            }
        },
        "InvocationResponse": {
            "type": "structure",
            "members": {
                "StatusCode": {"shape": "Integer"},
                "Payload": {"shape": "Blob"}
            }
        },
        "NamespacedFunctionName": {"type": "string"},
        "Blob": {"type": "blob", "sensitive": true},
        "Integer": {"type": "integer"}
    }
}"#;

#[test]
fn test_parse_service_with_companions() {
    let service = ServiceParser::from_json(SERVICE, "lambda")
        .unwrap()
        .with_paginators_json(r#"{"pagination": {"ListFunctions": {"input_token": "Marker", "output_token": "NextMarker", "result_key": "Functions"}}}"#)
        .unwrap()
        .with_waiters_json(r#"{"version": 2, "waiters": {"FunctionActive": {"operation": "GetFunctionConfiguration", "delay": 5, "maxAttempts": 60, "acceptors": []}}}"#)
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(service.model.metadata.class_name(), "Lambda");
    assert_eq!(
        service.model.api_reference_url("Invoke"),
        "https://docs.aws.amazon.com/goto/WebAPI/lambda-2015-03-31/Invoke"
    );
    assert_eq!(service.paginators[0].output_token, vec!["NextMarker"]);
    assert_eq!(service.paginators[0].result_key, vec!["Functions"]);
    assert_eq!(service.waiters[0].operation, "GetFunctionConfiguration");
    assert_eq!(service.waiters[0].max_attempts, 60);
}

#[test]
fn test_unsupported_shape_type_is_rejected() {
    let json = SERVICE.replace(r#""type": "integer""#, r#""type": "union""#);
    let err = ServiceParser::from_json(&json, "lambda")
        .unwrap()
        .parse()
        .unwrap_err();
    assert!(matches!(err, DocgenError::Parse(ref m) if m.contains("Integer")));
}

#[test]
fn test_operation_with_unknown_shape_is_rejected() {
    let json = SERVICE.replace(
        r#""output": {"shape": "InvocationResponse"}"#,
        r#""output": {"shape": "Missing"}"#,
    );
    let err = ServiceParser::from_json(&json, "lambda")
        .unwrap()
        .parse()
        .unwrap_err();
    assert!(err.to_string().contains("Missing"));
}

#[test]
fn test_missing_metadata_is_a_parse_error() {
    let result = ServiceParser::from_json(r#"{"operations": {}}"#, "lambda");
    assert!(matches!(result, Err(DocgenError::Parse(_))));
}
