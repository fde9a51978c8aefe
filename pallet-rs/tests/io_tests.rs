#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use float_cmp::approx_eq;
    use pallet_rs::io::export::export_solution;
    use pallet_rs::io::ext_repr::{ExtCarton, ExtLayerInstance, ExtPallet};
    use pallet_rs::io::import::{MAX_DIM, import_instance, import_length, import_spacing};
    use pallet_rs::io::svg::layer_to_svg;
    use pallet_rs::io::svg::svg_util::{Color, SvgDrawOptions, SvgLayoutTheme};
    use pallet_rs::packing::MaxRectsPacker;
    use pallet_rs::util::PackConfig;
    use test_case::test_case;

    fn ext_instance(length: f64, width: f64, spacing: f64) -> ExtLayerInstance {
        ExtLayerInstance {
            pallet: ExtPallet {
                length: 1200.0,
                width: 1000.0,
            },
            carton: ExtCarton { length, width },
            allow_rotation: true,
            spacing,
        }
    }

    #[test]
    fn instance_defaults_are_applied() {
        let json = r#"{
            "pallet": { "length": 1200, "width": 1000 },
            "carton": { "length": 300.0, "width": 200 }
        }"#;
        let ext: ExtLayerInstance = serde_json::from_str(json).unwrap();
        assert!(ext.allow_rotation);
        assert_eq!(ext.spacing, 0.0);

        let instance = import_instance(&ext).unwrap();
        assert_eq!((instance.pallet.length, instance.pallet.width), (1200, 1000));
        assert_eq!((instance.carton.length, instance.carton.width), (300, 200));
        assert_eq!(instance.spacing, 0);
    }

    #[test_case(-300.0; "negative")]
    #[test_case(0.0; "zero")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    #[test_case(300.5; "fractional")]
    #[test_case(0.2; "rounds to zero")]
    #[test_case(MAX_DIM as f64 * 2.0; "too large")]
    fn invalid_length_is_rejected(length: f64) {
        assert!(import_length("carton length", length).is_err());
        assert!(import_instance(&ext_instance(length, 200.0, 0.0)).is_err());
    }

    #[test]
    fn error_names_offending_field() {
        let err = import_instance(&ext_instance(300.0, -1.0, 0.0)).unwrap_err();
        assert!(format!("{err:#}").contains("carton width"));
    }

    #[test_case(0.0, Some(0); "zero")]
    #[test_case(10.0, Some(10); "positive")]
    #[test_case(-1.0, None; "negative")]
    #[test_case(2.5, None; "fractional")]
    #[test_case(f64::NAN, None; "nan")]
    fn spacing_import(spacing: f64, expected: Option<u64>) {
        assert_eq!(import_spacing(spacing).ok(), expected);
    }

    #[test]
    fn export_numbers_placements() {
        let instance = import_instance(&ext_instance(1000.0, 1200.0, 0.0)).unwrap();
        let solution = MaxRectsPacker::new(instance, PackConfig::default()).solve();
        let ext = export_solution(&instance, &solution);

        assert_eq!(ext.n_placed, 1);
        assert_eq!(ext.placements[0].index, 1);
        assert!(ext.placements[0].rotated);
        assert_eq!((ext.placements[0].width, ext.placements[0].height), (1200, 1000));
        assert!(approx_eq!(f64, ext.density, 1.0));
    }

    #[test]
    fn density_excludes_spacing() {
        let instance = import_instance(&ext_instance(300.0, 200.0, 10.0)).unwrap();
        let solution = MaxRectsPacker::new(instance, PackConfig::default()).solve();
        let ext = export_solution(&instance, &solution);

        assert_eq!(ext.n_placed, solution.n_placed());
        let expected = (300.0 * 200.0 * ext.n_placed as f64) / (1200.0 * 1000.0);
        assert!(approx_eq!(f64, ext.density, expected));
        assert!(!ext.truncated);
    }

    #[test]
    fn svg_contains_every_carton() {
        let instance = import_instance(&ext_instance(300.0, 200.0, 10.0)).unwrap();
        let solution = MaxRectsPacker::new(instance, PackConfig::default()).solve();
        let document = layer_to_svg(&instance, &solution, SvgDrawOptions::default(), "test");
        let svg = document.to_string();

        for i in 1..=solution.n_placed() {
            assert!(svg.contains(&format!("carton_{i}\"")), "carton {i} missing");
        }
        assert!(!svg.contains(&format!("carton_{}\"", solution.n_placed() + 1)));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn svg_without_labels_or_outlines() {
        let instance = import_instance(&ext_instance(300.0, 200.0, 10.0)).unwrap();
        let solution = MaxRectsPacker::new(instance, PackConfig::default()).solve();
        let options = SvgDrawOptions {
            theme: SvgLayoutTheme::GRAY,
            labels: false,
            carton_outlines: false,
        };
        let svg = layer_to_svg(&instance, &solution, options, "").to_string();

        assert!(!svg.contains("stroke-dasharray"));
        assert!(!svg.contains("text-anchor"));
    }

    #[test]
    fn color_parsing() {
        assert_eq!(Color::from_str("#FFC879").unwrap(), Color(0xFF, 0xC8, 0x79));
        assert_eq!(Color::from_str("87ceeb").unwrap(), Color(0x87, 0xCE, 0xEB));
        assert_eq!(Color(0x0A, 0x00, 0xFF).to_string(), "#0A00FF");
        assert!(Color::from_str("#FFF").is_err());
        assert!(Color::from_str("#GGGGGG").is_err());

        let theme: SvgLayoutTheme =
            serde_json::from_str(&serde_json::to_string(&SvgLayoutTheme::SKY).unwrap()).unwrap();
        assert_eq!(theme, SvgLayoutTheme::SKY);
    }
}
