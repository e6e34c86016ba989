#[cfg(test)]
mod tests {
    use backforge::app::blueprint::{Endpoint, Field, FieldType, HttpMethod, Model};
    use backforge::app::prompt_builder::{
        build_server_prompt, GenerationOptions, AUTH_REQUIREMENTS, IN_MEMORY_DATA_LAYER,
        MANDATED_FIRST_LINE, MONGO_DATA_LAYER, OUTPUT_CONSTRAINT,
    };
    use pretty_assertions::assert_eq;

    fn user_model() -> Model {
        Model::new(
            1,
            "User",
            vec![
                Field::new("email", FieldType::String),
                Field::new("age", FieldType::Number),
            ],
        )
    }

    fn list_users_endpoint() -> Endpoint {
        Endpoint::new(1, "/users", HttpMethod::Get, "List users")
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let models = vec![user_model()];
        let endpoints = vec![list_users_endpoint()];
        let options = GenerationOptions {
            use_database: true,
            use_auth: true,
        };

        let first = build_server_prompt(&models, &endpoints, options);
        let second = build_server_prompt(&models, &endpoints, options);

        assert_eq!(first, second);
    }

    #[test]
    fn test_blueprint_scenario_produces_the_expected_phrases() {
        let models = vec![user_model()];
        let endpoints = vec![list_users_endpoint()];
        let options = GenerationOptions {
            use_database: false,
            use_auth: false,
        };

        let prompt = build_server_prompt(&models, &endpoints, options);

        assert!(prompt.contains("Model: User"));
        assert!(prompt.contains("email: string"));
        assert!(prompt.contains("age: number"));
        assert!(prompt.contains("GET"));
        assert!(prompt.contains("/users"));
        assert!(prompt.contains("List users"));
        assert!(prompt.contains(IN_MEMORY_DATA_LAYER));
        assert!(!prompt.contains("Bearer"));
    }

    #[test]
    fn test_in_memory_branch_has_no_database_instructions() {
        let prompt = build_server_prompt(
            &[user_model()],
            &[list_users_endpoint()],
            GenerationOptions {
                use_database: false,
                use_auth: false,
            },
        );

        assert!(prompt.contains(IN_MEMORY_DATA_LAYER));
        assert!(prompt.contains("create an in-memory array"));
        assert!(!prompt.contains(MONGO_DATA_LAYER));
        assert!(!prompt.contains("Mongo"));
        assert!(!prompt.contains("MONGODB_URI"));
    }

    #[test]
    fn test_database_branch_has_no_in_memory_instructions() {
        let prompt = build_server_prompt(
            &[user_model()],
            &[list_users_endpoint()],
            GenerationOptions {
                use_database: true,
                use_auth: false,
            },
        );

        assert!(prompt.contains(MONGO_DATA_LAYER));
        assert!(prompt.contains("MONGODB_URI"));
        assert!(prompt.contains("Mongoose schema"));
        assert!(!prompt.contains(IN_MEMORY_DATA_LAYER));
        assert!(!prompt.contains("in-memory"));
    }

    #[test]
    fn test_auth_block_appears_only_when_requested() {
        let models = vec![user_model()];
        let endpoints = vec![list_users_endpoint()];

        let without_auth = build_server_prompt(
            &models,
            &endpoints,
            GenerationOptions {
                use_database: false,
                use_auth: false,
            },
        );
        let with_auth = build_server_prompt(
            &models,
            &endpoints,
            GenerationOptions {
                use_database: false,
                use_auth: true,
            },
        );

        assert!(!without_auth.contains(AUTH_REQUIREMENTS));
        assert!(!without_auth.contains("API_SECRET"));

        assert!(with_auth.contains(AUTH_REQUIREMENTS));
        assert!(with_auth.contains("Authorization: Bearer"));
        assert!(with_auth.contains("API_SECRET"));
        assert!(with_auth.contains("401 Unauthorized"));
    }

    #[test]
    fn test_every_option_combination_mandates_the_first_line() {
        for use_database in [false, true] {
            for use_auth in [false, true] {
                let prompt = build_server_prompt(
                    &[user_model()],
                    &[list_users_endpoint()],
                    GenerationOptions {
                        use_database,
                        use_auth,
                    },
                );

                assert!(
                    prompt.contains(MANDATED_FIRST_LINE),
                    "first-line instruction missing for database={} auth={}",
                    use_database,
                    use_auth
                );
                assert!(prompt.contains(OUTPUT_CONSTRAINT));
                assert!(prompt.contains("app.use(express.json());"));
                assert!(prompt.contains("process.env.PORT || 3000"));
            }
        }
    }

    #[test]
    fn test_models_render_in_store_order() {
        let models = vec![
            user_model(),
            Model::new(2, "Post", vec![Field::new("title", FieldType::String)]),
        ];

        let prompt = build_server_prompt(&models, &[], GenerationOptions::default());

        let user_at = prompt.find("Model: User").unwrap();
        let post_at = prompt.find("Model: Post").unwrap();
        assert!(user_at < post_at);
        assert!(prompt.contains("- Model: Post\n  Fields: title: string"));
    }

    #[test]
    fn test_endpoints_render_as_labeled_blocks() {
        let endpoints = vec![
            list_users_endpoint(),
            Endpoint::new(2, "/users", HttpMethod::Post, "Create a user"),
            Endpoint::new(3, "/users/:id", HttpMethod::Delete, "Delete one user"),
        ];

        let prompt = build_server_prompt(&[user_model()], &endpoints, GenerationOptions::default());

        assert!(prompt.contains("- Method: GET\n  Path: /users\n  Description: List users"));
        assert!(prompt.contains("- Method: POST\n  Path: /users\n  Description: Create a user"));
        assert!(
            prompt.contains("- Method: DELETE\n  Path: /users/:id\n  Description: Delete one user")
        );
    }

    #[test]
    fn test_id_instructions_follow_the_data_layer() {
        let in_memory = build_server_prompt(
            &[user_model()],
            &[list_users_endpoint()],
            GenerationOptions {
                use_database: false,
                use_auth: false,
            },
        );
        let database = build_server_prompt(
            &[user_model()],
            &[list_users_endpoint()],
            GenerationOptions {
                use_database: true,
                use_auth: false,
            },
        );

        assert!(in_memory.contains("generate a simple unique ID"));
        assert!(database.contains("Let MongoDB assign document ids"));
        assert!(!database.contains("generate a simple unique ID"));
    }

    #[test]
    fn test_boolean_fields_use_the_lowercase_type_name() {
        let models = vec![Model::new(
            1,
            "Flag",
            vec![Field::new("enabled", FieldType::Boolean)],
        )];

        let prompt = build_server_prompt(&models, &[], GenerationOptions::default());

        assert!(prompt.contains("enabled: boolean"));
    }

    #[test]
    fn test_empty_blueprint_still_produces_the_frame() {
        let prompt = build_server_prompt(&[], &[], GenerationOptions::default());

        assert!(prompt.contains("Data Models:"));
        assert!(prompt.contains("API Endpoints:"));
        assert!(prompt.contains("Requirements:"));
        assert!(prompt.contains(MANDATED_FIRST_LINE));
    }
}
