use crate::stores::NewTemplate;

pub const CLASSIC_TEMPLATE_NAME: &str = "Classic Recipe Card";

/// Built-in card used when no template is chosen.
///
/// The image slot is hidden when no image is supplied.
pub const CLASSIC_TEMPLATE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; background: #f5f5f5; }
  .recipe-card { background: white; padding: 30px; border-radius: 15px; box-shadow: 0 10px 30px rgba(0,0,0,0.1); }
  .title { font-size: 32px; color: #e74c3c; border-bottom: 3px solid #e74c3c; padding-bottom: 10px; margin-bottom: 20px; }
  .description { font-size: 16px; color: #666; margin-bottom: 20px; line-height: 1.6; }
  .meta { display: flex; gap: 20px; margin: 20px 0; flex-wrap: wrap; }
  .meta span { background: #f8f9fa; padding: 8px 15px; border-radius: 20px; font-size: 14px; font-weight: 500; }
  .ingredients h3, .instructions h3 { color: #333; margin-bottom: 15px; font-size: 20px; }
  .ingredients-list { list-style: none; padding: 0; }
  .ingredients-list li { margin-bottom: 8px; padding-left: 20px; position: relative; }
  .ingredients-list li:before { content: "• "; color: #e74c3c; font-weight: bold; position: absolute; left: 0; }
  .instructions-list { counter-reset: step-counter; list-style: none; padding: 0; }
  .instructions-list li { margin-bottom: 15px; padding-left: 40px; position: relative; counter-increment: step-counter; }
  .instructions-list li:before { content: counter(step-counter); position: absolute; left: 0; top: 0; background: #e74c3c; color: white; width: 25px; height: 25px; border-radius: 50%; text-align: center; font-size: 12px; font-weight: bold; }
  .recipe-image { width: 100%; max-width: 400px; height: 250px; object-fit: cover; border-radius: 10px; margin: 20px 0; }
  .recipe-image[src=""] { display: none; }
</style>
</head>
<body>
<div class="recipe-card">
  <img class="recipe-image" src="{{IMAGE_URL}}" alt="">
  <h1 class="title">{{TITLE}}</h1>
  <p class="description">{{DESCRIPTION}}</p>
  <div class="meta">
    <span>⏱️ {{COOK_TIME}} minutes</span>
    <span>🍽️ {{SERVINGS}} servings</span>
    <span>⭐ {{DIFFICULTY}}</span>
    <span>🔥 {{CALORIES}} calories</span>
  </div>
  <div class="ingredients"><h3>Ingredients</h3>{{INGREDIENTS}}</div>
  <div class="instructions"><h3>Instructions</h3>{{INSTRUCTIONS}}</div>
</div>
</body>
</html>
"#;

/// Templates a fresh store is seeded with
pub fn default_templates() -> Vec<NewTemplate> {
    vec![NewTemplate {
        name: CLASSIC_TEMPLATE_NAME.to_string(),
        html: CLASSIC_TEMPLATE_HTML.to_string(),
        preview_image_url: None,
        created_by: Some("system".to_string()),
    }]
}
