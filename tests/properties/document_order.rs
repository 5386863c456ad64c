//! Property tests for the exported document's shape.

use proptest::prelude::*;

use samvars::application::ExportOptions;
use samvars::domain::ports::NoopEventSink;
use samvars::{ExportOutcome, ExportUseCase, StackName, StackResource};

use super::common::{FakeLambda, FakeStack, LAMBDA};

const OTHER_TYPES: &[&str] = &[
    "AWS::S3::Bucket",
    "AWS::IAM::Role",
    "AWS::Lambda::Permission",
    "AWS::Lambda::LayerVersion",
    "AWS::Serverless::Function",
];

/// (is_function, other type index) per resource
fn resource_kinds() -> impl Strategy<Value = Vec<(bool, usize)>> {
    proptest::collection::vec((any::<bool>(), 0..OTHER_TYPES.len()), 0..40)
}

/// In-memory file system so cases do not touch disk
#[derive(Default)]
struct MemoryFs(std::cell::RefCell<Option<String>>);

impl samvars::domain::ports::FileSystem for MemoryFs {
    fn write(
        &self,
        _path: &std::path::Path,
        content: &str,
    ) -> samvars::domain::ports::FsResult<()> {
        *self.0.borrow_mut() = Some(content.to_string());
        Ok(())
    }

    fn exists(&self, _path: &std::path::Path) -> bool {
        self.0.borrow().is_some()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the document has exactly one key per Lambda function, in
    /// enumeration order, whatever the page size and concurrency.
    #[test]
    fn property_one_entry_per_function_in_order(
        kinds in resource_kinds(),
        page_size in 1usize..7,
        concurrency in 1usize..6,
    ) {
        let mut resources = Vec::new();
        let mut lambda = FakeLambda::default();
        let mut expected = Vec::new();
        for (i, (is_function, other)) in kinds.iter().enumerate() {
            let logical = format!("Res{i}");
            if *is_function {
                let physical = format!("stack-{logical}");
                lambda = lambda.with(&physical, &[("POS", "x")]);
                resources.push(StackResource::new(logical.as_str(), Some(physical), LAMBDA));
                expected.push(logical);
            } else {
                resources.push(StackResource::new(
                    logical.as_str(),
                    Some(format!("phys-{i}")),
                    OTHER_TYPES[*other],
                ));
            }
        }

        let use_case = ExportUseCase::new(
            FakeStack::new("stack", resources).paged(page_size),
            lambda,
            MemoryFs::default(),
        );
        let options = ExportOptions::new().with_concurrency(concurrency);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let outcome = runtime
            .block_on(use_case.execute(&StackName::new("stack").unwrap(), &options, &NoopEventSink))
            .unwrap();

        let ExportOutcome::Written(summary) = outcome else {
            panic!("expected a written document");
        };
        let ids: Vec<String> = summary.document.logical_ids().map(str::to_string).collect();
        prop_assert_eq!(ids, expected);
    }
}
