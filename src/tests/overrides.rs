use super::{find_record, parse_cpp};
use crate::{Error, override_declarations};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_interface_methods_in_declaration_order() {
        let code = r#"
class Printer {
public:
    virtual void print(const Document& doc) = 0;
    virtual int pages() const = 0;
};

class Pdf : public Printer {
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Pdf");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(
            declarations,
            vec![
                "void print(const Document & doc) override;".to_string(),
                "int pages() const override;".to_string(),
            ]
        );
    }

    #[test]
    fn test_const_noexcept_pure_virtual() {
        let code = r#"
class I {
public:
    virtual void run() const noexcept = 0;
};

class Task : public I {
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Task");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(declarations, vec!["void run() const noexcept override;".to_string()]);
    }

    #[test]
    fn test_interface_prefix_stripped_inside_namespace() {
        let code = r#"
namespace ui {
class View {
public:
    virtual void draw() = 0;
};

class Button : public View {
};
}
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Button");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(declarations, vec!["void draw() override;".to_string()]);
        assert!(
            !declarations[0].contains("ui::View::"),
            "interface prefix must be stripped, got: {}",
            declarations[0]
        );
    }

    #[test]
    fn test_two_bases_each_declaring_same_method_yield_two_entries() {
        // One entry per declaring record; deduplication across bases is
        // deliberately not performed.
        let code = r#"
class Clock {
public:
    virtual void tick() = 0;
};

class Timer {
public:
    virtual void tick() = 0;
};

class Watch : public Clock, public Timer {
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Watch");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(
            declarations,
            vec![
                "void tick() override;".to_string(),
                "void tick() override;".to_string(),
            ]
        );
    }

    #[test]
    fn test_indirect_base_pure_virtuals_are_collected() {
        let code = r#"
class Device {
public:
    virtual void reset() = 0;
};

class Sensor : public Device {
public:
    virtual double read() = 0;
};

class Thermometer : public Sensor {
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Thermometer");
        let declarations = override_declarations(code, record).unwrap();
        // Direct base first, then its base.
        assert_eq!(
            declarations,
            vec![
                "double read() override;".to_string(),
                "void reset() override;".to_string(),
            ]
        );
    }

    #[test]
    fn test_own_pure_virtuals_come_last() {
        let code = r#"
class Base {
public:
    virtual void start() = 0;
};

class Middle : public Base {
public:
    virtual void stop() = 0;
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Middle");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(
            declarations,
            vec![
                "void start() override;".to_string(),
                "void stop() override;".to_string(),
            ]
        );
    }

    #[test]
    fn test_attributes_are_kept_on_override_declarations() {
        let code = r#"
class I {
public:
    [[nodiscard]] virtual int cost() = 0;
};

class Impl : public I {
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Impl");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(declarations, vec!["[[nodiscard]] int cost() override;".to_string()]);
    }

    #[test]
    fn test_every_entry_ends_with_override_suffix() {
        let code = r#"
class A {
public:
    virtual void x() = 0;
    virtual void y() const = 0;
};

class B : public A {
public:
    virtual void z() = 0;
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "B");
        let declarations = override_declarations(code, record).unwrap();
        assert_eq!(declarations.len(), 3);
        for declaration in &declarations {
            assert!(
                declaration.ends_with(" override;"),
                "missing suffix: {}",
                declaration
            );
        }
    }

    #[test]
    fn test_class_without_pure_virtuals_yields_empty_set() {
        let code = r#"
class Plain {
public:
    void f();
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Plain");
        let declarations = override_declarations(code, record).unwrap();
        assert!(declarations.is_empty());
    }

    #[test]
    fn test_unresolvable_base_is_skipped() {
        let code = r#"
class Impl : public external::Api {
public:
    virtual void local() = 0;
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "Impl");
        let declarations = override_declarations(code, record).unwrap();
        // external::Api is not defined in this translation unit; only the
        // class's own pure virtual survives.
        assert_eq!(declarations, vec!["void local() override;".to_string()]);
    }

    #[test]
    fn test_non_record_node_is_a_contract_violation() {
        let code = "int add(int a, int b);\n";
        let tree = parse_cpp(code);
        let declaration = tree.root_node().child(0).unwrap();
        let result = override_declarations(code, declaration);
        assert!(matches!(result, Err(Error::NotARecord(_))));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let code = r#"
class I {
public:
    virtual void a() = 0;
    virtual void b() = 0;
};

class C : public I {
};
"#;
        let tree = parse_cpp(code);
        let record = find_record(&tree, code, "C");
        let first = override_declarations(code, record).unwrap();
        let second = override_declarations(code, record).unwrap();
        assert_eq!(first, second);
    }
}
