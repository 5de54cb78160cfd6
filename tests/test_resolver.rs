use recipe_card::template::{SUPPORTED_KEYS, CLASSIC_TEMPLATE_HTML};
use recipe_card::{generate_html, missing_placeholders, resolve, ImageRef, RecipeRecord};
use scraper::{Html, Selector};

fn ab_record() -> RecipeRecord {
    RecipeRecord {
        ingredients: vec!["a".to_string(), "b".to_string()],
        instructions: vec!["Mix.".to_string(), "Bake.".to_string()],
        ..Default::default()
    }
}

fn full_record() -> RecipeRecord {
    RecipeRecord {
        title: "Banana Cake".to_string(),
        description: "Moist.".to_string(),
        difficulty: "Easy".to_string(),
        servings: "8".to_string(),
        prep_time_min: "15".to_string(),
        cook_time_min: "45".to_string(),
        rest_time_min: "10".to_string(),
        total_time_min: "70".to_string(),
        temperature: "350".to_string(),
        calories: "320".to_string(),
        season: "Autumn".to_string(),
        website: "example.com".to_string(),
        ingredients: vec!["bananas".to_string(), "flour".to_string(), "sugar".to_string()],
        instructions: vec!["Mash.".to_string(), "Bake.".to_string()],
        equipment: "pan".to_string(),
        nutrition: "Fat 12g".to_string(),
    }
}

#[test]
fn test_wrapped_ingredients_emit_single_list() {
    let html = resolve("<ul>{{INGREDIENTS}}</ul>", &ab_record(), None, None);
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(html.matches("<ul").count(), 1);
}

#[test]
fn test_ordered_list_wrapper_for_steps() {
    let html = resolve(
        r#"<ol class="steps">
  [INSTRUCTIONS]
</ol>"#,
        &ab_record(),
        None,
        None,
    );
    assert_eq!(
        html,
        "<ol class=\"steps\">\n  <li>Mix.</li><li>Bake.</li>\n</ol>"
    );
}

#[test]
fn test_bare_ingredients_emit_full_list() {
    let html = resolve("<div>{{INGREDIENTS}}</div>", &ab_record(), None, None);
    assert_eq!(
        html,
        r#"<div><ul class="ingredients-list"><li>a</li><li>b</li></ul></div>"#
    );
}

#[test]
fn test_directions_alias_matches_instructions() {
    let html = resolve("{{DIRECTIONS}}|{{INSTRUCTIONS}}", &ab_record(), None, None);
    let list = r#"<ul class="instructions-list"><li>Mix.</li><li>Bake.</li></ul>"#;
    assert_eq!(html, format!("{list}|{list}"));
}

#[test]
fn test_unknown_placeholder_and_literal_words() {
    let html = resolve(
        "<h3>Ingredients</h3>{{FOO}}<p>TITLE and INSTRUCTIONS</p>",
        &ab_record(),
        None,
        None,
    );
    assert_eq!(html, "<h3>Ingredients</h3><p>TITLE and INSTRUCTIONS</p>");
}

#[test]
fn test_indexed_placeholders() {
    let record = RecipeRecord {
        ingredients: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        ..Default::default()
    };
    assert_eq!(resolve("[INGREDIENT 2]", &record, None, None), "b");
    assert_eq!(resolve("[INGREDIENT 9]", &record, None, None), "");
    assert_eq!(resolve("[ Step 1 ]", &record, None, None), "");
}

#[test]
fn test_images_and_logos() {
    let image = ImageRef::from_data_uri("data:image/png;base64,AAAA");
    let logo = ImageRef::from_url("https://cdn.example.com/logo.svg");
    let html = resolve(
        r#"<img src="{{IMAGE_URL}}"><img src="[logo url]">{{IMAGE}}"#,
        &ab_record(),
        Some(&image),
        Some(&logo),
    );
    assert_eq!(
        html,
        r#"<img src="data:image/png;base64,AAAA"><img src="https://cdn.example.com/logo.svg">data:image/png;base64,AAAA"#
    );

    let html = resolve(r#"<img src="{{LOGO}}">"#, &ab_record(), None, None);
    assert_eq!(html, r#"<img src="">"#);
}

#[test]
fn test_defaults_in_template() {
    let html = resolve("{{TITLE}}/{{SERVINGS}}/{{RATING}}/{{NOTES}}", &RecipeRecord::default(), None, None);
    assert_eq!(html, "Untitled Recipe/4/5/");
}

#[test]
fn test_text_values_are_escaped() {
    let record = RecipeRecord {
        title: "Mac <&> Cheese".to_string(),
        ingredients: vec!["salt & pepper".to_string()],
        ..Default::default()
    };
    let html = resolve("<h1>{{TITLE}}</h1><p>[INGREDIENT 1]</p>", &record, None, None);
    assert_eq!(html, "<h1>Mac &lt;&amp;&gt; Cheese</h1><p>salt &amp; pepper</p>");

    let record = RecipeRecord {
        title: r#"12" Pizza"#.to_string(),
        ..Default::default()
    };
    let html = resolve("<h1>{{TITLE}}</h1>", &record, None, None);
    assert_eq!(html, "<h1>12&quot; Pizza</h1>");
}

#[test]
fn test_quotes_stay_inside_attributes() {
    let record = RecipeRecord {
        title: r#"12" Pizza"#.to_string(),
        description: r#"Mom's "best" pie"#.to_string(),
        ingredients: vec![r#"1 8" pan"#.to_string()],
        ..Default::default()
    };
    let html = resolve(
        r#"<img alt="{{TITLE}}" title='[DESCRIPTION]' data-first="[INGREDIENT 1]" src="x.png">"#,
        &record,
        None,
        None,
    );

    let document = Html::parse_fragment(&html);
    let selector = Selector::parse("img").unwrap();
    let img = document.select(&selector).next().unwrap();
    assert_eq!(img.value().attr("alt"), Some(r#"12" Pizza"#));
    assert_eq!(img.value().attr("title"), Some(r#"Mom's "best" pie"#));
    assert_eq!(img.value().attr("data-first"), Some(r#"1 8" pan"#));
    assert_eq!(img.value().attr("src"), Some("x.png"));
}

#[test]
fn test_every_supported_key_round_trip() {
    let mut template = String::new();
    for key in SUPPORTED_KEYS {
        template.push_str(&format!("<div>{{{{{key}}}}}</div>\n"));
        template.push_str(&format!("<span>[{}]</span>\n", key.replace('_', " ")));
    }
    template.push_str("<p>[INGREDIENT 1] [STEP 2] [INGREDIENT 3]</p>");

    let image = ImageRef::from_url("https://cdn.example.com/cake.jpg");
    let html = resolve(&template, &full_record(), Some(&image), Some(&image));

    assert!(!html.contains("{{"));
    assert!(!html.contains("}}"));
    assert!(!html.contains('['));
    assert!(!html.contains(']'));
    assert!(html.contains("<p>bananas Bake. sugar</p>"));
    assert!(html.contains("<div>Banana Cake</div>"));
    assert!(html.contains("<span>70</span>"));
}

#[test]
fn test_template_is_left_untouched() {
    let template = String::from("<h1>{{TITLE}}</h1>");
    let before = template.clone();
    let _ = resolve(&template, &full_record(), None, None);
    assert_eq!(template, before);
}

#[test]
fn test_classic_template() {
    let image = ImageRef::from_url("https://cdn.example.com/cake.jpg");
    let html = resolve(CLASSIC_TEMPLATE_HTML, &full_record(), Some(&image), None);

    assert!(html.contains(r#"<h1 class="title">Banana Cake</h1>"#));
    assert!(html.contains("⏱️ 70 minutes"));
    assert!(html.contains(r#"<ul class="ingredients-list"><li>bananas</li>"#));
    assert!(html.contains(r#"<ul class="instructions-list"><li>Mash.</li><li>Bake.</li></ul>"#));
    assert!(html.contains(r#"src="https://cdn.example.com/cake.jpg""#));
    assert!(html.contains("<h3>Ingredients</h3>"));
    assert!(missing_placeholders(CLASSIC_TEMPLATE_HTML, recipe_card::template::REQUIRED_KEYS).is_empty());
}

#[test]
fn test_classic_template_without_image() {
    let html = resolve(CLASSIC_TEMPLATE_HTML, &full_record(), None, None);

    assert!(html.contains(r#"<img class="recipe-image" src="" alt="">"#));
    assert!(html.contains(r#".recipe-image[src=""] { display: none; }"#));
}

#[test]
fn test_generate_html_end_to_end() {
    let text = "Recipe Title: Toast\nCooking Time (Minutes): 3\n### Ingredients\nbread, butter\n### Instructions\n1. Toast. 2. Butter.";
    let html = generate_html(
        text,
        "<h1>[title]</h1><p>{{TIME}} min</p><ol>{{ directions }}</ol><ul>{{INGREDIENTS}}</ul>",
        None,
        None,
    );
    assert_eq!(
        html,
        "<h1>Toast</h1><p>3 min</p><ol><li>Toast.</li><li>Butter.</li></ol><ul><li>bread</li><li>butter</li></ul>"
    );
}
