#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use palplan::capacity::BindingConstraint;
    use palplan::config::PlannerConfig;
    use palplan::io;
    use palplan::io::ext_repr::ExtPlan;
    use palplan::planner::{import_plan, solve, write_solution};
    use pallet_rs::util::PackConfig;
    use test_case::test_case;

    const EURO_PALLET_PATH: &str = "../assets/euro_pallet.json";
    const CONFIG_PATH: &str = "../assets/config.json";

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn euro_plan() -> ExtPlan {
        io::read_json(Path::new(EURO_PALLET_PATH)).unwrap()
    }

    fn output_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("palplan_{name}_{}", std::process::id()));
        fs::create_dir_all(&folder).unwrap();
        folder
    }

    #[test]
    fn euro_pallet_plan() {
        init_logger();
        let plan = import_plan(&euro_plan()).unwrap();
        let results = solve(&plan, &PlannerConfig::default());

        let summary = results
            .iter()
            .map(|r| {
                (
                    r.carton.id,
                    r.capacity.boxes_per_layer,
                    r.capacity.total_boxes,
                    r.capacity.binding,
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(
            summary,
            vec![
                (1, 18, 100, BindingConstraint::Weight),
                (2, 8, 40, BindingConstraint::HeightGeometry),
                (3, 3, 12, BindingConstraint::HeightGeometry),
                (4, 0, 0, BindingConstraint::HeightGeometry),
            ]
        );
    }

    #[test]
    fn config_file_is_parsed() {
        let config: PlannerConfig = io::read_json(Path::new(CONFIG_PATH)).unwrap();
        assert_eq!(
            config.pack_config,
            PackConfig {
                max_iterations: Some(10000)
            }
        );
        assert!(config.svg_draw_options.labels);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: PlannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn plan_defaults_are_applied() {
        let json = r#"{
            "pallet": { "length": 1200, "width": 800, "max_height": 1800 },
            "cartons": [{ "id": 7, "length": 300, "width": 200, "height": 200, "weight": 2.0 }]
        }"#;
        let ext_plan: ExtPlan = serde_json::from_str(json).unwrap();
        assert_eq!(ext_plan.pallet.max_payload, 1000.0);
        assert!(ext_plan.allow_rotation);

        let plan = import_plan(&ext_plan).unwrap();
        assert_eq!(plan.limits.max_height, 1800);
        assert_eq!(plan.cartons[0].layer.spacing, 0);
    }

    #[test_case(|p: &mut ExtPlan| p.cartons.clear(); "no cartons")]
    #[test_case(|p: &mut ExtPlan| p.cartons[1].id = p.cartons[0].id; "duplicate ids")]
    #[test_case(|p: &mut ExtPlan| p.cartons[0].weight = 0.0; "weightless carton")]
    #[test_case(|p: &mut ExtPlan| p.cartons[2].height = -1.0; "negative height")]
    #[test_case(|p: &mut ExtPlan| p.pallet.max_payload = f64::INFINITY; "unbounded payload")]
    #[test_case(|p: &mut ExtPlan| p.pallet.width = 0.0; "flat pallet")]
    #[test_case(|p: &mut ExtPlan| p.spacing = -5.0; "negative spacing")]
    fn invalid_plan_is_rejected(modify: fn(&mut ExtPlan)) {
        let mut ext_plan = euro_plan();
        modify(&mut ext_plan);
        assert!(import_plan(&ext_plan).is_err());
    }

    #[test]
    fn spacing_reduces_layer() {
        let mut ext_plan = euro_plan();
        ext_plan.allow_rotation = false;
        let without = solve(&import_plan(&ext_plan).unwrap(), &PlannerConfig::default());
        ext_plan.spacing = 10.0;
        let with = solve(&import_plan(&ext_plan).unwrap(), &PlannerConfig::default());

        assert_eq!(without[0].capacity.boxes_per_layer, 20);
        assert_eq!(with[0].capacity.boxes_per_layer, 12);
    }

    #[test]
    fn solution_files_are_written() {
        init_logger();
        let ext_plan = euro_plan();
        let config = PlannerConfig::default();
        let results = solve(&import_plan(&ext_plan).unwrap(), &config);

        let folder = output_folder("write");
        write_solution(&ext_plan, &results, &config, "euro_pallet", &folder).unwrap();

        let json: serde_json::Value =
            io::read_json(&folder.join("sol_euro_pallet.json")).unwrap();
        assert_eq!(json["results"].as_array().unwrap().len(), 4);
        assert_eq!(json["results"][0]["layer"]["n_placed"], 18);
        assert_eq!(json["results"][0]["capacity"]["binding"], "weight");
        assert_eq!(json["pallet"]["length"], 1200.0);

        for id in 1..=4 {
            let svg_path = folder.join(format!("sol_euro_pallet_{id}.svg"));
            let svg = fs::read_to_string(&svg_path).unwrap();
            assert!(svg.contains("id=\"pallet\""));
        }

        fs::remove_dir_all(folder).unwrap();
    }
}
