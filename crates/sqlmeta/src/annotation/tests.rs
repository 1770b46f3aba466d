use super::*;

fn parse(line: &str) -> AnnotationResult<Option<Annotation<'_>>> {
    parse_annotation(line, CommentSyntax::all())
}

#[test]
fn parses_every_dialect() {
    let dash = parse("-- name: GetUser :one").unwrap().unwrap();
    assert_eq!(dash.name, "GetUser");
    assert_eq!(dash.mode, ExecMode::One);

    let hash = parse("# name: ListUsers :many").unwrap().unwrap();
    assert_eq!(hash.name, "ListUsers");
    assert_eq!(hash.mode, ExecMode::Many);

    let block = parse("/* name: DeleteUser :exec */").unwrap().unwrap();
    assert_eq!(block.name, "DeleteUser");
    assert_eq!(block.mode, ExecMode::Exec);
}

#[test]
fn parses_every_mode() {
    for mode in ExecMode::ALL {
        let line = format!("-- name: q {mode}");
        let a = parse(&line).unwrap().unwrap();
        assert_eq!(a.mode, mode);
    }
}

#[test]
fn hyphenated_modes_are_aliases() {
    assert_eq!(parse("-- name: q :exec-rows").unwrap().unwrap().mode, ExecMode::ExecRows);
    assert_eq!(parse("-- name: q :exec-result").unwrap().unwrap().mode, ExecMode::ExecResult);
}

#[test]
fn tolerates_extra_whitespace() {
    let a = parse("-- name:   get_user\t:one   ").unwrap().unwrap();
    assert_eq!((a.name, a.mode), ("get_user", ExecMode::One));
}

#[test]
fn non_annotations_are_none() {
    assert_eq!(parse("SELECT 1;"), Ok(None));
    assert_eq!(parse("-- a regular comment"), Ok(None));
    assert_eq!(parse("--name: x :one"), Ok(None));
    assert_eq!(parse(" -- name: x :one"), Ok(None));
}

#[test]
fn disabled_dialect_is_none() {
    let syntax = CommentSyntax::dash_only();
    assert_eq!(parse_annotation("# name: q :one", syntax), Ok(None));
    assert_eq!(parse_annotation("/* name: q :one */", syntax), Ok(None));
}

#[test]
fn missing_mode() {
    assert!(matches!(
        parse("-- name: get_user"),
        Err(AnnotationError::MissingExecutionMode(_))
    ));
    assert!(matches!(
        parse("-- name:"),
        Err(AnnotationError::MissingExecutionMode(_))
    ));
    assert!(matches!(
        parse("/* name: get_user */"),
        Err(AnnotationError::MissingExecutionMode(_))
    ));
}

#[test]
fn malformed_token_count() {
    assert_eq!(
        parse("-- name: get_user :one extra"),
        Err(AnnotationError::MalformedAnnotation(
            "-- name: get_user :one extra".to_string()
        ))
    );
}

#[test]
fn block_comment_requires_closer() {
    assert!(matches!(
        parse("/* name: get_user :one"),
        Err(AnnotationError::MalformedAnnotation(_))
    ));
    assert!(matches!(
        parse("/* name: get_user :one*/"),
        Err(AnnotationError::MalformedAnnotation(_))
    ));
}

#[test]
fn invalid_mode() {
    assert_eq!(
        parse("-- name: get_user :bogus"),
        Err(AnnotationError::InvalidExecutionMode(":bogus".to_string()))
    );
    // The colon is part of the token.
    assert_eq!(
        parse("-- name: get_user one"),
        Err(AnnotationError::InvalidExecutionMode("one".to_string()))
    );
}

#[test]
fn mode_is_checked_before_name() {
    assert!(matches!(
        parse("-- name: bad-name :bogus"),
        Err(AnnotationError::InvalidExecutionMode(_))
    ));
}

#[test]
fn invalid_name_propagates() {
    assert_eq!(
        parse("-- name: bad-name :one"),
        Err(AnnotationError::InvalidName("bad-name".to_string()))
    );
}

#[test]
fn mode_display_round_trips_through_from_str() {
    for mode in ExecMode::ALL {
        assert_eq!(mode.to_string().parse::<ExecMode>(), Ok(mode));
    }
    assert!(ExecMode::One.returns_rows());
    assert!(!ExecMode::ExecRows.returns_rows());
}

#[test]
fn find_annotation_uses_first_candidate() {
    let text = "\n-- name: GetUser :one\nSELECT 1;\n-- name: Other :many\n";
    let a = find_annotation(text, CommentSyntax::all()).unwrap().unwrap();
    assert_eq!(a.name, "GetUser");

    assert_eq!(find_annotation("SELECT 1;\n-- note\n", CommentSyntax::all()), Ok(None));
    assert!(find_annotation("-- name: GetUser\nSELECT 1;", CommentSyntax::all()).is_err());
}
