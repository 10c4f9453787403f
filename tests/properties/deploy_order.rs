use proptest::prelude::*;
use rocdeploy::domain::ports::NoopEventSink;
use rocdeploy::{
    default_inventory, DeployConfig, DeployOptions, DeployUseCase, DryRunCommandRunner,
    StepStatus,
};

fn known_suffix() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["6", "8", "10", "12", "16", "17", "18", "99"])
}

proptest! {
    #[test]
    fn visited_controllers_follow_inventory_order(
        pieces in prop::collection::vec(known_suffix(), 1..8)
    ) {
        let config = DeployConfig::new(default_inventory().unwrap());
        let use_case = DeployUseCase::new(&config, DryRunCommandRunner);

        let report = use_case.execute(&pieces.join(","), &DeployOptions::default(), &NoopEventSink);

        let visited: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
        let expected: Vec<&str> = config
            .inventory
            .names()
            .filter(|name| pieces.iter().any(|p| *name == format!("ROC{}", p)))
            .collect();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn every_visited_controller_gets_both_steps(
        pieces in prop::collection::vec(known_suffix(), 1..8)
    ) {
        let config = DeployConfig::new(default_inventory().unwrap());
        let use_case = DeployUseCase::new(&config, DryRunCommandRunner);

        let report = use_case.execute(&pieces.join(","), &DeployOptions::default(), &NoopEventSink);

        for entry in &report.entries {
            prop_assert_eq!(&entry.copy, &StepStatus::DryRun);
            prop_assert_eq!(entry.build.as_ref(), Some(&StepStatus::DryRun));
        }
        prop_assert!(report.is_success());
    }
}
