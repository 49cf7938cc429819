use super::*;

fn filled_form() -> FeatureForm {
    FeatureForm {
        hn: "12345678".to_owned(),
        sex: "female".to_owned(),
        age: "61".to_owned(),
        ud: "none".to_owned(),
        bw: "64".to_owned(),
        ht: "158".to_owned(),
        bmi: "25.6".to_owned(),
        ikdc: "42.5".to_owned(),
        lysholm: "48".to_owned(),
        kl_grade: "2".to_owned(),
        mm_extrusion: "3.4".to_owned(),
    }
}

// =============================================================
// parse_features
// =============================================================

#[test]
fn complete_form_parses() {
    let request = parse_features(&filled_form()).expect("valid form");
    assert_eq!(request.hn, "12345678");
    assert_eq!(request.age, 61.0);
    assert_eq!(request.kl_grade, 2);
    assert_eq!(request.mm_extrusion, 3.4);
}

#[test]
fn numeric_fields_are_trimmed() {
    let mut form = filled_form();
    form.age = " 61 ".to_owned();
    form.kl_grade = " 3 ".to_owned();
    let request = parse_features(&form).expect("valid form");
    assert_eq!(request.age, 61.0);
    assert_eq!(request.kl_grade, 3);
}

#[test]
fn missing_hn_is_rejected() {
    let mut form = filled_form();
    form.hn = "  ".to_owned();
    assert_eq!(parse_features(&form), Err("Enter the patient HN.".to_owned()));
}

#[test]
fn missing_sex_is_rejected() {
    let mut form = filled_form();
    form.sex = String::new();
    assert_eq!(parse_features(&form), Err("Enter the patient sex.".to_owned()));
}

#[test]
fn non_numeric_age_names_the_field() {
    let mut form = filled_form();
    form.age = "sixty".to_owned();
    assert_eq!(parse_features(&form), Err("Age must be a number".to_owned()));
}

#[test]
fn fractional_kl_grade_is_rejected() {
    let mut form = filled_form();
    form.kl_grade = "2.5".to_owned();
    assert_eq!(
        parse_features(&form),
        Err("KL grade must be a whole number".to_owned())
    );
}

#[test]
fn out_of_range_kl_grade_is_rejected() {
    let mut form = filled_form();
    form.kl_grade = "5".to_owned();
    assert_eq!(
        parse_features(&form),
        Err("KL grade must be between 0 and 4".to_owned())
    );
}

// =============================================================
// importance_percent
// =============================================================

#[test]
fn importance_percent_scales_and_rounds() {
    assert_eq!(importance_percent(0.0), 0.0);
    assert_eq!(importance_percent(0.424), 42.0);
    assert_eq!(importance_percent(1.0), 100.0);
}

#[test]
fn importance_percent_clamps_out_of_range_weights() {
    assert_eq!(importance_percent(-0.3), 0.0);
    assert_eq!(importance_percent(1.8), 100.0);
}
