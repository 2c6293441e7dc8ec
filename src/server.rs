//! HTTP control surface: a flat JSON parameter API plus a small inline
//! control page. Handlers only copy in and out of the parameter store; all
//! heavy work stays on the display thread.

use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::params::{ParameterStore, SimulationParameters};

pub struct ServerContext {
    pub store: Arc<ParameterStore>,
    pub ip: Option<IpAddr>,
    pub port: u16,
}

pub fn router(ctx: Arc<ServerContext>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/params", get(get_params).post(post_params))
        .with_state(ctx)
}

/// Bind and serve until the shared stop flag is raised.
pub async fn serve(
    ctx: Arc<ServerContext>,
    bind: &str,
    stop: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((bind, ctx.port)).await?;
    info!(addr = %listener.local_addr()?, "http server listening");
    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(wait_for_stop(stop))
        .await?;
    Ok(())
}

async fn wait_for_stop(stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::SeqCst) {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

async fn get_params(State(ctx): State<Arc<ServerContext>>) -> Json<SimulationParameters> {
    Json(ctx.store.snapshot())
}

async fn post_params(
    State(ctx): State<Arc<ServerContext>>,
    Json(patch): Json<Map<String, Value>>,
) -> Json<Value> {
    let params = ctx.store.update(&patch);
    Json(json!({ "status": "ok", "params": params }))
}

async fn index(State(ctx): State<Arc<ServerContext>>) -> Html<String> {
    Html(render_index(&ctx))
}

fn render_index(ctx: &ServerContext) -> String {
    let params = serde_json::to_string(&ctx.store.snapshot()).unwrap_or_else(|_| "{}".into());
    let address = ctx
        .ip
        .map(|ip| format!("http://{ip}:{}", ctx.port))
        .unwrap_or_else(|| "(no network)".to_string());
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Fieldscope</title>
<style>
  body {{ font-family: sans-serif; background: #0f172a; color: #94a3b8; max-width: 28rem; margin: 2rem auto; }}
  h1 {{ color: #22d3ee; font-size: 1.3rem; }}
  label {{ display: block; margin-top: 0.8rem; }}
  input, select {{ width: 100%; }}
  #status {{ margin-top: 1rem; color: #22c55e; }}
</style>
</head>
<body>
<h1>Fieldscope</h1>
<p>Device: {address}</p>
<form id="controls"></form>
<div id="status"></div>
<script>
const initial = {params};
const fields = {{
  waveguide: ["field_view", "radius", "frequency", "epsilon_r", "mu_r"],
  diffusion1d: ["length", "amplitude", "diffusion"],
  diffusion2d: ["length", "amplitude", "diffusion"],
}};
const views = ["e_only", "h_only", "radial", "cutoff", "bessel"];
const form = document.getElementById("controls");

function rebuild(params) {{
  form.innerHTML = "";
  const model = document.createElement("select");
  for (const tag of Object.keys(fields)) {{
    const opt = new Option(tag, tag, false, tag === params.model);
    model.add(opt);
  }}
  model.onchange = () => push({{ model: model.value }});
  const modelLabel = document.createElement("label");
  modelLabel.textContent = "model";
  modelLabel.appendChild(model);
  form.appendChild(modelLabel);

  for (const key of fields[params.model]) {{
    const label = document.createElement("label");
    label.textContent = key;
    let input;
    if (key === "field_view") {{
      input = document.createElement("select");
      for (const v of views) input.add(new Option(v, v, false, v === params[key]));
    }} else {{
      input = document.createElement("input");
      input.type = "number";
      input.step = "any";
      input.value = params[key];
    }}
    input.onchange = () => push({{ [key]: input.value }});
    label.appendChild(input);
    form.appendChild(label);
  }}
}}

async function push(patch) {{
  const resp = await fetch("/api/params", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify(patch),
  }});
  const body = await resp.json();
  document.getElementById("status").textContent = "applied";
  rebuild(body.params);
}}

rebuild(initial);
</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_current_parameters() {
        let ctx = ServerContext {
            store: Arc::new(ParameterStore::default()),
            ip: None,
            port: 5000,
        };
        let page = render_index(&ctx);
        assert!(page.contains("\"model\":\"waveguide\""));
        assert!(page.contains("(no network)"));
    }
}
