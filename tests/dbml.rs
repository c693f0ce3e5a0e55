use expect_test::expect;
use indoc::indoc;
use prisma_dbml::{Document, GeneratorConfig, generate_dbml};

fn render(dmmf: &str, config: &GeneratorConfig) -> String {
    let document = match Document::from_json(dmmf) {
        Ok(d) => d,
        Err(err) => panic!("DMMF parsing failed\n\n{err}"),
    };
    // Expectation literals end with a newline.
    format!("{}\n", generate_dbml(&document.datamodel, config).unwrap())
}

#[test]
fn blog_with_implicit_many_to_many() {
    let dmmf = indoc! {r#"
        {
          "datamodel": {
            "models": [
              {
                "name": "User",
                "dbName": "users",
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true,
                    "hasDefaultValue": true, "default": { "name": "autoincrement", "args": [] } },
                  { "name": "email", "kind": "scalar", "type": "String", "isUnique": true, "isRequired": true },
                  { "name": "role", "kind": "enum", "type": "Role", "isRequired": true,
                    "hasDefaultValue": true, "default": "USER" },
                  { "name": "posts", "kind": "object", "type": "Post", "isList": true, "isRequired": true,
                    "relationName": "PostToUser", "relationFromFields": [], "relationToFields": [] }
                ],
                "primaryKey": null,
                "uniqueFields": []
              },
              {
                "name": "Post",
                "dbName": null,
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true,
                    "hasDefaultValue": true, "default": { "name": "autoincrement", "args": [] } },
                  { "name": "title", "kind": "scalar", "type": "String", "isRequired": true,
                    "documentation": "Post's title" },
                  { "name": "authorId", "kind": "scalar", "type": "Int", "isRequired": true },
                  { "name": "author", "kind": "object", "type": "User", "isRequired": true,
                    "relationName": "PostToUser", "relationFromFields": ["authorId"],
                    "relationToFields": ["id"], "relationOnDelete": "Cascade" },
                  { "name": "tags", "kind": "object", "type": "Tag", "isList": true, "isRequired": true,
                    "relationName": "PostToTag", "relationFromFields": [], "relationToFields": [] }
                ],
                "primaryKey": null,
                "uniqueFields": []
              },
              {
                "name": "Tag",
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true },
                  { "name": "name", "kind": "scalar", "type": "String", "isUnique": true, "isRequired": true },
                  { "name": "posts", "kind": "object", "type": "Post", "isList": true, "isRequired": true,
                    "relationName": "PostToTag", "relationFromFields": [], "relationToFields": [] }
                ],
                "primaryKey": null,
                "uniqueFields": []
              }
            ],
            "enums": [
              { "name": "Role", "values": [{ "name": "USER" }, { "name": "ADMIN" }], "dbName": null }
            ],
            "types": []
          }
        }
    "#};

    let expected = expect![[r#"
        //// ------------------------------------------------------
        //// THIS FILE WAS AUTOMATICALLY GENERATED (DO NOT MODIFY)
        //// ------------------------------------------------------

        // Schema: public

        Table User {
          id Int [pk, increment]
          email String [unique, not null]
          role Role [not null, default: 'USER']
          posts Post [not null]
        }

        Table Post {
          id Int [pk, increment]
          title String [not null, Note: 'Post\'s title']
          authorId Int [not null]
          author User [not null]
          tags Tag [not null]
        }

        Table Tag {
          id Int [pk]
          name String [unique, not null]
          posts Post [not null]
        }

        Table PostToTag {
          tagsId Int [ref: > Tag.id]
          postsId Int [ref: > Post.id]
        }

        Enum Role {
          USER
          ADMIN
        }

        Ref PostToUser:Post.authorId > User.id [delete: Cascade]
    "#]];

    expected.assert_eq(&render(dmmf, &GeneratorConfig::default()));
}

#[test]
fn multi_schema_mapped_to_db_names() {
    let dmmf = indoc! {r#"
        {
          "datamodel": {
            "models": [
              {
                "name": "Account",
                "dbName": "accounts",
                "schema": "auth",
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "String", "isId": true, "isRequired": true,
                    "hasDefaultValue": true, "default": { "name": "uuid", "args": [4] } },
                  { "name": "email", "kind": "scalar", "type": "String", "isUnique": true, "isRequired": true },
                  { "name": "invoices", "kind": "object", "type": "Invoice", "isList": true,
                    "relationName": "AccountToInvoice", "relationFromFields": [], "relationToFields": [] }
                ],
                "uniqueFields": []
              },
              {
                "name": "Invoice",
                "dbName": "invoices",
                "schema": "billing",
                "documentation": "Issued invoices",
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true,
                    "hasDefaultValue": true, "default": { "name": "autoincrement", "args": [] } },
                  { "name": "number", "kind": "scalar", "type": "Int", "isRequired": true },
                  { "name": "accountId", "kind": "scalar", "type": "String", "isRequired": true },
                  { "name": "account", "kind": "object", "type": "Account", "isRequired": true,
                    "relationName": "AccountToInvoice", "relationFromFields": ["accountId"],
                    "relationToFields": ["id"] }
                ],
                "uniqueFields": [["accountId", "number"]]
              }
            ],
            "enums": []
          }
        }
    "#};

    let config = GeneratorConfig {
        map_to_db_schema: true,
        include_relation_fields: false,
        project_name: Some("Billing".to_string()),
        project_database_type: Some("PostgreSQL".to_string()),
        ..GeneratorConfig::default()
    };

    let expected = expect![[r#"
        //// ------------------------------------------------------
        //// THIS FILE WAS AUTOMATICALLY GENERATED (DO NOT MODIFY)
        //// ------------------------------------------------------

        Project "Billing" {
          database_type: 'PostgreSQL'
        }

        // Schema: auth

        Table auth.accounts {
          id String [pk]
          email String [unique, not null]
        }

        // Schema: billing

        Table billing.invoices {
          id Int [pk, increment]
          number Int [not null]
          accountId String [not null]

          indexes {
            (accountId, number) [unique]
          }

          Note: 'Issued invoices'
        }

        Ref AccountToInvoice:billing.invoices.accountId > auth.accounts.id
    "#]];

    expected.assert_eq(&render(dmmf, &config));
}

#[test]
fn malformed_join_relation_fails() {
    let dmmf = indoc! {r#"
        {
          "datamodel": {
            "models": [
              { "name": "Post", "fields": [
                { "name": "id", "kind": "scalar", "type": "Int", "isId": true },
                { "name": "tags", "kind": "object", "type": "Tag", "isList": true,
                  "relationName": "PostToTag", "relationFromFields": [], "relationToFields": [] }
              ]},
              { "name": "Tag", "fields": [
                { "name": "key", "kind": "scalar", "type": "String", "isId": true },
                { "name": "posts", "kind": "object", "type": "Post", "isList": true,
                  "relationName": "PostToTag", "relationFromFields": [], "relationToFields": [] }
              ]}
            ]
          }
        }
    "#};

    let document = Document::from_json(dmmf).unwrap();
    let err = generate_dbml(&document.datamodel, &GeneratorConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Identifier field id not found on model Tag");
}

#[test]
fn mapped_enum_keeps_model_name() {
    let dmmf = indoc! {r#"
        {
          "datamodel": {
            "models": [
              {
                "name": "User",
                "dbName": "users",
                "fields": [
                  { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true },
                  { "name": "role", "kind": "enum", "type": "Role", "isRequired": true }
                ]
              }
            ],
            "enums": [
              { "name": "Role", "dbName": "user_role", "values": [{ "name": "USER" }] }
            ]
          }
        }
    "#};

    let config = GeneratorConfig {
        map_to_db_schema: true,
        ..GeneratorConfig::default()
    };

    let expected = expect![[r#"
        //// ------------------------------------------------------
        //// THIS FILE WAS AUTOMATICALLY GENERATED (DO NOT MODIFY)
        //// ------------------------------------------------------

        // Schema: public

        Table users {
          id Int [pk]
          role Role [not null]
        }

        Enum Role {
          USER
        }
    "#]];

    expected.assert_eq(&render(dmmf, &config));
}
