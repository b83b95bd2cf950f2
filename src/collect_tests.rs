#[cfg(test)]
mod tests {
    use crate::collect::compile_models;
    use crate::error::{ERR_MODEL_ON_FILE_INPUT, ERR_REDUNDANT_VALUE_ATTRIBUTE, ERR_SOURCE_SYNTAX};
    use crate::options::ModelOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_form() {
        let source = r#"
            const view = (
                <form>
                    <input v-model_trim={form.name} />
                    <input type="checkbox" v-model={form.agree} />
                    <Picker v-model-color={form.color} />
                </form>
            );
        "#;

        let report = compile_models(source, "form.tsx", &ModelOptions::default()).unwrap();
        assert_eq!(report.sites.len(), 3);

        let name = &report.sites[0];
        assert_eq!(name.tag, "input");
        assert_eq!(name.primitive.as_deref(), Some("vModelText"));
        assert_eq!(name.modifiers, vec!["trim"]);
        assert_eq!(name.line, 4);
        let tuple = name.directive.as_deref().unwrap();
        assert!(tuple.contains("_vModelText"));
        assert!(tuple.contains("form.name"));
        assert!(tuple.contains("trim") && tuple.contains("true"));
        assert!(name.props.contains("onUpdate:modelValue"));
        assert!(!name.props.contains("\"modelValue\""));

        let agree = &report.sites[1];
        assert_eq!(agree.primitive.as_deref(), Some("vModelCheckbox"));

        let color = &report.sites[2];
        assert_eq!(color.tag, "component");
        assert_eq!(color.prop_name, "color");
        assert!(color.directive.is_none());
        assert!(color.props.contains("onUpdate:color"));
        assert!(color.props.contains("form.color = $event"));

        assert_eq!(report.helpers, vec!["_vModelText", "_vModelCheckbox"]);
        assert_eq!(
            report.import.as_deref(),
            Some("import { vModelText as _vModelText, vModelCheckbox as _vModelCheckbox } from \"vue\";")
        );
    }

    #[test]
    fn test_nested_attribute_elements_are_visited() {
        let source = "<Layout aside={<select v-model={choice} />} />;";
        let report = compile_models(source, "layout.tsx", &ModelOptions::default()).unwrap();
        assert_eq!(report.sites.len(), 1);
        assert_eq!(report.sites[0].primitive.as_deref(), Some("vModelSelect"));
    }

    #[test]
    fn test_no_models() {
        let report =
            compile_models("<div class=\"a\" />;", "plain.tsx", &ModelOptions::default()).unwrap();
        assert!(report.sites.is_empty());
        assert!(report.helpers.is_empty());
        assert!(report.import.is_none());
    }

    #[test]
    fn test_options_drive_import() {
        let options = ModelOptions::from_json(r#"{ "runtimeModule": "@vue/runtime-dom" }"#).unwrap();
        let report = compile_models("<select v-model={x} />;", "a.tsx", &options).unwrap();
        assert_eq!(
            report.import.as_deref(),
            Some("import { vModelSelect as _vModelSelect } from \"@vue/runtime-dom\";")
        );
    }

    #[test]
    fn test_first_error_aborts_with_location() {
        let source = "<div>\n  <input type=\"file\" v-model={f} />\n  <input v-model={g} value=\"x\" />\n</div>;";
        let err = compile_models(source, "upload.tsx", &ModelOptions::default()).unwrap_err();
        assert_eq!(err.code, ERR_MODEL_ON_FILE_INPUT);
        assert_eq!(err.file, "upload.tsx");
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 10);
    }

    #[test]
    fn test_redundant_value_points_at_value_attribute() {
        let source = "<input v-model={g} value=\"x\" />;";
        let err = compile_models(source, "a.tsx", &ModelOptions::default()).unwrap_err();
        assert_eq!(err.code, ERR_REDUNDANT_VALUE_ATTRIBUTE);
        assert_eq!((err.line, err.column), (1, 20));
    }

    #[test]
    fn test_syntax_error() {
        let err = compile_models("<input v-model={", "broken.tsx", &ModelOptions::default())
            .unwrap_err();
        assert_eq!(err.code, ERR_SOURCE_SYNTAX);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report =
            compile_models("<input v-model={x} />;", "a.tsx", &ModelOptions::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sites"][0]["propName"], "modelValue");
        assert_eq!(json["sites"][0]["primitive"], "vModelText");
        assert_eq!(json["helpers"][0], "_vModelText");
    }
}
