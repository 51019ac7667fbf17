use crate::models::{PriorityScale, ProcessingOptions};
use crate::render::{escape_html, render_stats};
use crate::view::{ViewState, TOAST_TTL_SECS};

pub fn render_index(view: &ViewState, options: ProcessingOptions) -> String {
    INDEX_HTML
        .replace("{{TOASTS}}", &render_toasts(view))
        .replace("{{OVERLAY_CLASS}}", if view.loading { "" } else { "hidden" })
        .replace("{{INPUT}}", &escape_html(&view.input))
        .replace("{{TASK_COUNT}}", &escape_html(&view.task_count_label))
        .replace("{{SCALE_OPTIONS}}", &scale_options(options.priority_scale))
        .replace("{{TAG_OPTIONS}}", &tag_options(options.max_tags))
        .replace(
            "{{TIME_CHECKED}}",
            if options.include_time_estimates { "checked" } else { "" },
        )
        .replace("{{PROCESS_DISABLED}}", disabled(view.process_enabled))
        .replace("{{EXPORT_DISABLED}}", disabled(view.export_enabled))
        .replace("{{CLEAR_DISABLED}}", disabled(view.clear_enabled))
        .replace("{{STATS}}", &render_stats(|slot| view.stat(slot).to_string()))
        .replace("{{LAST_UPDATED}}", &escape_html(&view.last_updated))
        .replace("{{TASKS}}", &view.task_list_html())
        .replace("{{TOAST_TTL}}", &TOAST_TTL_SECS.to_string())
}

pub fn render_confirm(prompt: &str) -> String {
    CONFIRM_HTML.replace("{{PROMPT}}", &escape_html(prompt))
}

fn disabled(enabled: bool) -> &'static str {
    if enabled { "" } else { "disabled" }
}

fn render_toasts(view: &ViewState) -> String {
    view.toasts
        .iter()
        .map(|toast| {
            format!(
                r#"<div class="toast {}"><div class="toast-title">{}</div><div class="toast-message">{}</div></div>"#,
                toast.kind.class(),
                escape_html(&toast.title),
                escape_html(&toast.message),
            )
        })
        .collect()
}

fn scale_options(selected: PriorityScale) -> String {
    PriorityScale::ALL
        .iter()
        .map(|scale| {
            let label = match scale {
                PriorityScale::OneToFive => "1-5 (5 = highest)",
                PriorityScale::OneToThree => "1-3 (3 = highest)",
                PriorityScale::LowMedHigh => "Low / Medium / High",
            };
            format!(
                r#"<option value="{}"{}>{label}</option>"#,
                scale.as_str(),
                if *scale == selected { " selected" } else { "" },
            )
        })
        .collect()
}

fn tag_options(selected: u32) -> String {
    (1..=5)
        .map(|n| {
            format!(
                r#"<option value="{n}"{}>{n}</option>"#,
                if n == selected { " selected" } else { "" },
            )
        })
        .collect()
}

const CONFIRM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Clear tasks?</title>
  <style>
    body { font-family: "Space Grotesk", "Trebuchet MS", sans-serif; display: grid; place-items: center; min-height: 100vh; margin: 0; background: #f8f3e6; color: #2b2a28; }
    .dialog { background: white; border-radius: 20px; padding: 32px; box-shadow: 0 24px 60px rgba(47, 72, 88, 0.18); display: grid; gap: 18px; }
    .dialog-actions { display: flex; gap: 12px; justify-content: flex-end; }
    button, a.button { border: none; border-radius: 999px; padding: 12px 20px; font-weight: 600; cursor: pointer; text-decoration: none; font-size: 1rem; }
    .danger { background: #d64545; color: white; }
    .secondary { background: #e6e1d8; color: #2b2a28; }
  </style>
</head>
<body>
  <form class="dialog" method="post" action="/tasks/clear">
    <p>{{PROMPT}}</p>
    <input type="hidden" name="confirm" value="yes" />
    <div class="dialog-actions">
      <a class="button secondary" href="/">Cancel</a>
      <button class="danger" type="submit">Clear all tasks</button>
    </div>
  </form>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Task Tamer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #8b857d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --high: #d64545;
      --medium: #e0a100;
      --low: #3f8f5a;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      grid-template-columns: minmax(0, 2fr) minmax(0, 1fr);
      gap: 24px;
    }

    @media (max-width: 860px) {
      .app {
        grid-template-columns: 1fr;
      }
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 18px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    textarea {
      width: 100%;
      min-height: 220px;
      border-radius: 16px;
      border: 1px solid rgba(47, 72, 88, 0.15);
      padding: 14px;
      font: inherit;
      resize: vertical;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
      justify-content: space-between;
    }

    .controls {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    select {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.15);
    }

    .checkbox {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: #e6e1d8;
      color: var(--ink);
    }

    button.danger {
      background: var(--high);
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
    }

    .count {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(2, minmax(0, 1fr));
      gap: 12px;
    }

    .stat-item {
      background: white;
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 4px;
    }

    .stat-value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat-label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .task-item {
      background: white;
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 8px;
    }

    .task-badges {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .badge {
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.78rem;
      font-weight: 600;
      background: #eef1f3;
      color: var(--accent-2);
    }

    .badge.priority-high { background: var(--high); color: white; }
    .badge.priority-medium { background: var(--medium); color: white; }
    .badge.priority-low { background: var(--low); color: white; }

    .task-title {
      font-weight: 600;
    }

    .task-original,
    .task-time,
    .last-updated {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .empty-state {
      text-align: center;
      color: var(--muted);
      padding: 28px 12px;
    }

    .loading-skeleton {
      background: white;
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 10px;
    }

    .skeleton-badges {
      display: flex;
      gap: 6px;
    }

    .skeleton-badge,
    .skeleton-title,
    .skeleton-text {
      height: 14px;
      border-radius: 8px;
      background: linear-gradient(90deg, #eee 25%, #f6f6f6 50%, #eee 75%);
      background-size: 200% 100%;
      animation: shimmer 1.2s infinite;
    }

    .skeleton-title { width: 70%; height: 18px; }
    .skeleton-text { width: 90%; }

    #loading-overlay {
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 40, 0.35);
      display: grid;
      place-items: center;
      color: white;
      font-size: 1.2rem;
      z-index: 20;
    }

    #loading-overlay.hidden {
      display: none;
    }

    #toast-container {
      position: fixed;
      top: 18px;
      right: 18px;
      display: grid;
      gap: 10px;
      z-index: 30;
    }

    .toast {
      background: white;
      border-radius: 14px;
      padding: 12px 16px;
      box-shadow: var(--shadow);
      border-left: 4px solid var(--low);
      animation: fade-out 0.4s ease forwards;
      animation-delay: calc({{TOAST_TTL}}s - 0.4s);
    }

    .toast.error {
      border-left-color: var(--high);
    }

    .toast-title {
      font-weight: 600;
    }

    @keyframes shimmer {
      to { background-position: -200% 0; }
    }

    @keyframes fade-out {
      to { opacity: 0; visibility: hidden; }
    }
  </style>
</head>
<body>
  <div id="toast-container">{{TOASTS}}</div>
  <div id="loading-overlay" class="{{OVERLAY_CLASS}}">Processing tasks...</div>

  <main class="app">
    <section class="card">
      <h1>Task Tamer</h1>
      <form id="process-form" method="post" action="/tasks/process">
        <div class="card">
          <textarea id="task-input" name="input" placeholder="One task per line">{{INPUT}}</textarea>
          <div class="row">
            <span id="task-count" class="count">{{TASK_COUNT}}</span>
            <button id="load-sample-btn" class="secondary" type="submit" formaction="/tasks/sample">Load sample tasks</button>
          </div>
          <div class="controls">
            <label>Priority scale
              <select id="priority-scale" name="priority_scale">{{SCALE_OPTIONS}}</select>
            </label>
            <label>Max tags
              <select id="max-tags" name="max_tags">{{TAG_OPTIONS}}</select>
            </label>
            <label class="checkbox">
              <input id="include-time-estimates" type="checkbox" name="include_time_estimates" {{TIME_CHECKED}} />
              Include time estimates
            </label>
          </div>
          <div class="row">
            <button id="process-btn-main" type="submit" {{PROCESS_DISABLED}}>Process Tasks</button>
            <button id="export-btn-main" class="secondary" type="submit" formmethod="get" formaction="/tasks/export" {{EXPORT_DISABLED}}>Export CSV</button>
          </div>
        </div>
      </form>

      <div class="row">
        <h2>Processed tasks</h2>
        <span id="last-updated" class="last-updated">{{LAST_UPDATED}}</span>
      </div>
      <div id="tasks-container">
{{TASKS}}
      </div>
    </section>

    <aside class="card" id="stats-container">
      <h2>Overview</h2>
      <div class="stats-grid">
{{STATS}}
      </div>
      <div class="row">
        <button id="process-btn" type="submit" form="process-form" {{PROCESS_DISABLED}}>Process</button>
        <form method="get" action="/tasks/export">
          <button id="export-btn" class="secondary" type="submit" {{EXPORT_DISABLED}}>Export</button>
        </form>
        <form method="post" action="/tasks/clear">
          <button id="clear-btn" class="danger" type="submit" {{CLEAR_DISABLED}}>Clear</button>
        </form>
      </div>
    </aside>
  </main>

  <script>
    const input = document.getElementById('task-input');
    const count = document.getElementById('task-count');
    const overlay = document.getElementById('loading-overlay');
    const processForm = document.getElementById('process-form');

    input.addEventListener('input', async () => {
      const res = await fetch('/api/count', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ text: input.value })
      });
      if (res.ok) {
        count.textContent = (await res.json()).label;
      }
    });

    processForm.addEventListener('submit', (event) => {
      const action = event.submitter && event.submitter.getAttribute('formaction');
      if (!action) {
        overlay.classList.remove('hidden');
      }
    });
  </script>
</body>
</html>
"#;
