use sqlmeta::{
    AnnotationError, CommentSyntax, Engine, ExecMode, Scanner, TrailingBlock, scan,
};

const USERS: &str = include_str!("fixtures/users.sql");
const MYSQL: &str = include_str!("fixtures/mysql.sql");

#[test]
fn users_file_keeps_good_queries_and_reports_bad_one() {
    let out = scan(USERS, Engine::Postgresql.comment_syntax());

    let names: Vec<_> = out.statements.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["GetUser", "ListUsers", "CreateUser"]);

    assert_eq!(out.statements[0].start_line, 2);
    assert_eq!(out.statements[0].mode, ExecMode::One);
    assert_eq!(
        out.statements[0].sql_text,
        " SELECT id, email FROM users WHERE id = $1; "
    );
    assert_eq!(out.statements[2].mode, ExecMode::ExecResult);

    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].line, 15);
    assert_eq!(
        out.errors[0].error,
        AnnotationError::InvalidName("delete-user".to_string())
    );
}

#[test]
fn users_file_with_trailing_block_kept() {
    let out = Scanner::new(CommentSyntax::dash_only())
        .trailing(TrailingBlock::Keep)
        .scan(USERS);
    let last = out.statements.last().unwrap();
    assert_eq!(last.name, "CountUsers");
    assert_eq!(last.sql_text, " SELECT count(*) FROM users; ");
}

#[test]
fn mysql_dialects_depend_on_engine() {
    let out = scan(MYSQL, Engine::Mysql.comment_syntax());
    let names: Vec<_> = out.statements.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["GetAuthor", "UpdateAuthor", "ListAuthors"]);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].line, 6);
    assert!(matches!(
        out.errors[0].error,
        AnnotationError::MissingExecutionMode(_)
    ));

    // Under postgres rules `#` and `/*` are SQL text.
    let out = scan(MYSQL, Engine::Postgresql.comment_syntax());
    assert!(out.statements.is_empty());
    assert!(out.errors.is_empty());
}

#[test]
fn sqlite_ignores_hash_annotations() {
    let out = Scanner::new(Engine::Sqlite.comment_syntax())
        .trailing(TrailingBlock::Keep)
        .scan(MYSQL);
    let names: Vec<_> = out.statements.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["UpdateAuthor", "ListAuthors"]);
    assert!(out.statements[1].sql_text.contains("# name: DeleteAuthor"));
    assert!(out.is_clean());
}

#[test]
fn records_serialize_with_canonical_modes() {
    let out = scan(USERS, CommentSyntax::dash_only());
    let json = serde_json::to_value(&out.statements[1]).unwrap();
    assert_eq!(json["name"], "ListUsers");
    assert_eq!(json["mode"], ":many");
    assert_eq!(json["start_line"], 7);
}

#[test]
fn comment_syntax_deserializes_with_defaults() {
    let syntax: CommentSyntax = serde_json::from_str(r#"{"hash": true}"#).unwrap();
    assert_eq!(
        syntax,
        CommentSyntax {
            dash: false,
            hash: true,
            slash_star: false,
        }
    );
}
