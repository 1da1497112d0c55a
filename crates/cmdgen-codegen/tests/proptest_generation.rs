//! Property-based tests for cross-language generation.

use cmdgen_codegen::{CommandDef, FieldDef, FieldType, Generator, GeneratorConfig};
use cmdgen_core::naming::normalize;
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,6}([A-Z][a-z]{1,6}){0,3}"
}

fn field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::String),
        Just(FieldType::Integer),
        Just(FieldType::Boolean),
        Just(FieldType::optional(FieldType::String)),
        Just(FieldType::optional(FieldType::Integer)),
        Just(FieldType::optional(FieldType::Boolean)),
    ]
}

fn command() -> impl Strategy<Value = CommandDef> {
    (
        identifier(),
        prop::collection::btree_map(identifier(), field_type(), 0..6),
    )
        .prop_map(|(name, fields)| {
            fields
                .into_iter()
                .fold(CommandDef::new(format!("{name}Command")), |def, (field, ty)| {
                    def.with_field(FieldDef::new(format!("{field}Value"), ty))
                })
        })
}

proptest! {
    #[test]
    fn every_language_agrees_on_names(def in command()) {
        let generator = Generator::from_config(&GeneratorConfig::default()).unwrap();

        let report = generator.run(std::slice::from_ref(&def));

        prop_assert!(report.failures.is_empty(), "{:?}", report.failures);
        let expected_members: Vec<String> =
            def.fields.iter().map(|f| normalize(&f.name).unwrap()).collect();
        let expected_name = normalize(&def.name).unwrap();
        for artifact in &report.artifacts {
            prop_assert_eq!(&artifact.members, &expected_members);
            prop_assert_eq!(&artifact.command_name, &expected_name);
        }
    }

    #[test]
    fn parallel_and_sequential_runs_agree(defs in prop::collection::vec(command(), 0..4)) {
        let config = GeneratorConfig::default();
        let parallel = Generator::from_config(&config).unwrap().with_parallel(true).run(&defs);
        let sequential = Generator::from_config(&config).unwrap().with_parallel(false).run(&defs);

        prop_assert_eq!(parallel.artifacts, sequential.artifacts);
        prop_assert_eq!(parallel.failures, sequential.failures);
    }
}
