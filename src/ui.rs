use crate::models::{Area, Goal, HabitResponse, WheelResponse};
use crate::wheel::{wheel_layout, WheelConfig};
use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn render_wheel_page(cfg: &WheelConfig, areas: &[Area]) -> String {
    let layout = wheel_layout(cfg, areas);
    WHEEL_HTML
        .replace("{{WHEEL_SVG}}", &wheel_svg(cfg, &layout))
        .replace("{{AREA_CARDS}}", &area_cards(areas))
        .replace("{{LABEL_LINE_HEIGHT}}", &cfg.label_line_height.to_string())
}

pub fn render_habits_page(today: NaiveDate, habits: &[HabitResponse]) -> String {
    let title = format!("{} {}", MONTH_NAMES[today.month0() as usize], today.year());
    HABITS_HTML
        .replace("{{MONTH_TITLE}}", &title)
        .replace("{{HABIT_CARDS}}", &habit_cards(habits))
}

fn wheel_svg(cfg: &WheelConfig, layout: &WheelResponse) -> String {
    let mut out = String::new();
    for sector in &layout.sectors {
        let mut tspans = String::new();
        for (i, line) in sector.label.lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { cfg.label_line_height };
            tspans.push_str(&format!(
                r#"<tspan x="{x}" dy="{dy}">{line}</tspan>"#,
                x = sector.label.x,
                dy = dy,
                line = escape_html(line)
            ));
        }
        out.push_str(&format!(
            r#"<g class="sector" data-area-id="{id}">
  <path class="sector-pale" d="{pale}" fill="{color}" />
  <path class="sector-bright" d="{bright}" fill="{color}" />
  <text class="sector-value" x="{vx}" y="{vy}" text-anchor="middle" dominant-baseline="middle">{value}</text>
  <text class="sector-label" x="{lx}" y="{ly}" text-anchor="{anchor}">{tspans}</text>
</g>
"#,
            id = sector.id,
            pale = sector.pale_d,
            bright = sector.bright_d,
            color = sector.color,
            vx = sector.value_x,
            vy = sector.value_y,
            value = sector.value,
            lx = sector.label.x,
            ly = sector.label.y,
            anchor = sector.label.anchor,
            tspans = tspans,
        ));
    }
    out
}

fn area_cards(areas: &[Area]) -> String {
    areas.iter().map(area_card).collect()
}

fn area_card(area: &Area) -> String {
    let goals: String = area.goals.iter().map(goal_item).collect();
    format!(
        r#"<article class="area-card" data-area-id="{id}" data-name="{name}">
  <header class="area-head">
    <span class="swatch" style="background:{color}"></span>
    <h3 class="area-name">{name}</h3>
    <div class="row-actions">
      <button class="area-rename" type="button">Rename</button>
      <button class="area-delete" type="button">Delete</button>
    </div>
  </header>
  <label class="value-row">
    <input class="value-slider" type="range" min="1" max="10" value="{value}" />
    <span class="value-readout">{value}</span>
  </label>
  <ul class="goals">{goals}</ul>
  <form class="goal-form">
    <input name="text" placeholder="Add a goal" autocomplete="off" />
    <button type="submit">Add</button>
  </form>
</article>
"#,
        id = area.id,
        name = escape_html(&area.name),
        color = area.color,
        value = area.value,
        goals = goals,
    )
}

fn goal_item(goal: &Goal) -> String {
    let done = if goal.completed { " done" } else { "" };
    let checked = if goal.completed { " checked" } else { "" };
    format!(
        r#"<li class="goal{done}" data-goal-id="{id}" data-text="{text}">
  <input class="goal-toggle" type="checkbox"{checked} />
  <span class="goal-text">{text}</span>
  <button class="goal-edit" type="button">Edit</button>
  <button class="goal-delete" type="button">&times;</button>
</li>
"#,
        done = done,
        id = goal.id,
        text = escape_html(&goal.text),
        checked = checked,
    )
}

fn habit_cards(habits: &[HabitResponse]) -> String {
    habits.iter().map(habit_card).collect()
}

fn habit_card(habit: &HabitResponse) -> String {
    format!(
        r#"<article class="habit-card" data-habit-id="{id}" data-name="{name}">
  <header class="habit-head">
    <h3 class="habit-name">{name}</h3>
    <div class="row-actions">
      <button class="habit-rename" type="button">Rename</button>
      <button class="habit-delete" type="button">Delete</button>
    </div>
  </header>
  <div class="calendar">
    <div class="calendar-head">
      <span>Mo</span><span>Tu</span><span>We</span><span>Th</span><span>Fr</span><span>Sa</span><span>Su</span>
    </div>
    <div class="calendar-days">{days}</div>
  </div>
</article>
"#,
        id = habit.id,
        name = escape_html(&habit.name),
        days = day_cells(habit),
    )
}

fn day_cells(habit: &HabitResponse) -> String {
    let mut out = String::new();
    for _ in 0..habit.leading_blanks {
        out.push_str(r#"<span class="day blank"></span>"#);
    }
    for day in &habit.days {
        let mut classes = String::from("day");
        if day.today {
            classes.push_str(" today");
        }
        if day.completed {
            classes.push_str(" done");
        }
        if !day.clickable {
            classes.push_str(" inactive");
        }
        let disabled = if day.clickable { "" } else { " disabled" };
        out.push_str(&format!(
            r#"<button type="button" class="{classes}" data-date="{date}"{disabled}>{day}</button>"#,
            classes = classes,
            date = day.date,
            disabled = disabled,
            day = day.day,
        ));
    }
    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const WHEEL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Life Balance Wheel</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
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
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header.page {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    nav.links {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    nav.links a {
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      text-decoration: none;
    }

    nav.links a.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .wheel-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #wheel {
      width: 100%;
      max-width: 680px;
      display: block;
      margin: 0 auto;
    }

    #wheel text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .sector-pale {
      fill-opacity: 0.25;
      stroke: white;
      stroke-width: 2;
    }

    .sector-bright {
      fill-opacity: 0.92;
      stroke: white;
      stroke-width: 2;
    }

    .sector-value {
      fill: white;
      font-size: 15px;
      font-weight: 600;
    }

    .sector-label {
      fill: var(--ink);
      font-size: 13px;
    }

    .areas {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
      gap: 16px;
    }

    .area-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
      align-content: start;
    }

    .area-head {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .area-head h3 {
      margin: 0;
      font-size: 1.05rem;
      flex: 1;
      min-width: 0;
      overflow-wrap: anywhere;
    }

    .swatch {
      width: 16px;
      height: 16px;
      border-radius: 50%;
      flex: none;
      border: 2px solid white;
      box-shadow: 0 0 0 1px rgba(47, 72, 88, 0.2);
    }

    .row-actions {
      display: flex;
      gap: 6px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      font-family: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .row-actions button,
    .goal-form button {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 6px 12px;
      font-size: 0.8rem;
    }

    .area-delete,
    .goal-delete {
      color: #c63b2b;
    }

    .value-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .value-slider {
      flex: 1;
      accent-color: var(--accent);
    }

    .value-readout {
      font-weight: 600;
      font-size: 1.1rem;
      color: var(--accent-2);
      min-width: 2ch;
      text-align: right;
    }

    .goals {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .goal {
      display: flex;
      align-items: center;
      gap: 8px;
      background: rgba(47, 72, 88, 0.04);
      border-radius: 12px;
      padding: 8px 10px;
    }

    .goal-text {
      flex: 1;
      min-width: 0;
      overflow-wrap: anywhere;
      font-size: 0.92rem;
    }

    .goal.done .goal-text {
      text-decoration: line-through;
      color: #8b857d;
    }

    .goal button {
      background: transparent;
      padding: 2px 6px;
      font-size: 0.78rem;
      color: #6b645d;
    }

    .goal-toggle {
      accent-color: var(--accent);
    }

    .goal-form {
      display: flex;
      gap: 8px;
    }

    .goal-form input {
      flex: 1;
      min-width: 0;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 999px;
      padding: 8px 14px;
      font-family: inherit;
      font-size: 0.9rem;
    }

    .btn-add {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      padding: 16px 20px;
      font-size: 1rem;
      justify-self: start;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .btn-add {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="page">
      <div>
        <h1>Life Balance Wheel</h1>
        <p class="subtitle">Rate each area of your life, then set goals to move the needle.</p>
      </div>
      <nav class="links">
        <a class="active" href="/">Wheel</a>
        <a href="/habits">Habits</a>
      </nav>
    </header>

    <section class="wheel-card">
      <svg id="wheel" viewBox="-150 -60 600 440" aria-label="Life balance wheel" role="img">{{WHEEL_SVG}}</svg>
    </section>

    <section class="areas" id="areas">{{AREA_CARDS}}</section>

    <button class="btn-add" id="add-area" type="button">Add area</button>

    <div class="status" id="status"></div>
    <p class="hint">Filled wedges show each score out of 10. Up to 20 areas share the circle evenly.</p>
  </main>

  <script>
    const wheelEl = document.getElementById('wheel');
    const areasEl = document.getElementById('areas');
    const addAreaBtn = document.getElementById('add-area');
    const statusEl = document.getElementById('status');
    const labelLineHeight = {{LABEL_LINE_HEIGHT}};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showError = (err) => setStatus(err.message, 'error');

    const setSaved = () => {
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[c]));

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const post = (url, body) =>
      request(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });

    const renderWheel = (layout) => {
      wheelEl.innerHTML = layout.sectors
        .map((sector) => {
          const tspans = sector.label.lines
            .map((line, index) => `<tspan x="${sector.label.x}" dy="${index === 0 ? 0 : labelLineHeight}">${escapeHtml(line)}</tspan>`)
            .join('');
          return `<g class="sector" data-area-id="${sector.id}">
  <path class="sector-pale" d="${sector.pale_d}" fill="${sector.color}" />
  <path class="sector-bright" d="${sector.bright_d}" fill="${sector.color}" />
  <text class="sector-value" x="${sector.value_x}" y="${sector.value_y}" text-anchor="middle" dominant-baseline="middle">${sector.value}</text>
  <text class="sector-label" x="${sector.label.x}" y="${sector.label.y}" text-anchor="${sector.label.anchor}">${tspans}</text>
</g>`;
        })
        .join('');
    };

    const redrawWheel = () => request('/api/wheel').then(renderWheel);

    const patchSector = (sector) => {
      const group = wheelEl.querySelector(`g[data-area-id="${sector.id}"]`);
      if (!group) {
        return redrawWheel();
      }
      group.querySelector('.sector-bright').setAttribute('d', sector.bright_d);
      group.querySelector('.sector-pale').setAttribute('d', sector.pale_d);
      group.querySelector('.sector-value').textContent = sector.value;
    };

    const renderGoals = (card, area) => {
      card.querySelector('.goals').innerHTML = area.goals
        .map(
          (goal) => `<li class="goal${goal.completed ? ' done' : ''}" data-goal-id="${goal.id}" data-text="${escapeHtml(goal.text)}">
  <input class="goal-toggle" type="checkbox"${goal.completed ? ' checked' : ''} />
  <span class="goal-text">${escapeHtml(goal.text)}</span>
  <button class="goal-edit" type="button">Edit</button>
  <button class="goal-delete" type="button">&times;</button>
</li>`
        )
        .join('');
    };

    areasEl.addEventListener('input', (event) => {
      if (event.target.classList.contains('value-slider')) {
        event.target.closest('.value-row').querySelector('.value-readout').textContent = event.target.value;
      }
    });

    areasEl.addEventListener('change', (event) => {
      const card = event.target.closest('.area-card');
      if (!card) {
        return;
      }
      if (event.target.classList.contains('value-slider')) {
        post(`/api/areas/${card.dataset.areaId}/value`, { value: Number(event.target.value) })
          .then((sector) => {
            patchSector(sector);
            setSaved();
          })
          .catch(showError);
      } else if (event.target.classList.contains('goal-toggle')) {
        const item = event.target.closest('li');
        post(`/api/areas/${card.dataset.areaId}/goals/${item.dataset.goalId}/toggle`)
          .then((area) => {
            renderGoals(card, area);
            setSaved();
          })
          .catch(showError);
      }
    });

    areasEl.addEventListener('click', (event) => {
      const button = event.target.closest('button');
      if (!button) {
        return;
      }
      const card = button.closest('.area-card');
      if (!card) {
        return;
      }
      const areaId = card.dataset.areaId;

      if (button.classList.contains('area-rename')) {
        const name = prompt('Rename area', card.dataset.name);
        if (name === null) {
          return;
        }
        post(`/api/areas/${areaId}/name`, { name })
          .then((area) => {
            card.dataset.name = area.name;
            card.querySelector('.area-name').textContent = area.name;
            setSaved();
            return redrawWheel();
          })
          .catch(showError);
      } else if (button.classList.contains('area-delete')) {
        if (!confirm('Delete this area and its goals?')) {
          return;
        }
        request(`/api/areas/${areaId}`, { method: 'DELETE' })
          .then(() => location.reload())
          .catch(showError);
      } else if (button.classList.contains('goal-edit')) {
        const item = button.closest('li');
        const text = prompt('Edit goal', item.dataset.text);
        if (text === null) {
          return;
        }
        post(`/api/areas/${areaId}/goals/${item.dataset.goalId}/text`, { text })
          .then((area) => {
            renderGoals(card, area);
            setSaved();
          })
          .catch(showError);
      } else if (button.classList.contains('goal-delete')) {
        if (!confirm('Delete this goal?')) {
          return;
        }
        const item = button.closest('li');
        request(`/api/areas/${areaId}/goals/${item.dataset.goalId}`, { method: 'DELETE' })
          .then((area) => {
            renderGoals(card, area);
            setSaved();
          })
          .catch(showError);
      }
    });

    areasEl.addEventListener('submit', (event) => {
      if (!event.target.classList.contains('goal-form')) {
        return;
      }
      event.preventDefault();
      const card = event.target.closest('.area-card');
      const input = event.target.querySelector('input[name="text"]');
      post(`/api/areas/${card.dataset.areaId}/goals`, { text: input.value })
        .then((area) => {
          renderGoals(card, area);
          input.value = '';
          setSaved();
        })
        .catch(showError);
    });

    addAreaBtn.addEventListener('click', () => {
      post('/api/areas')
        .then(() => location.reload())
        .catch(showError);
    });
  </script>
</body>
</html>
"#;

const HABITS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
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
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header.page {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    nav.links {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    nav.links a {
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      text-decoration: none;
    }

    nav.links a.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .habit-cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 16px;
    }

    .habit-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
      align-content: start;
    }

    .habit-head {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .habit-head h3 {
      margin: 0;
      font-size: 1.05rem;
      flex: 1;
      min-width: 0;
      overflow-wrap: anywhere;
    }

    .row-actions {
      display: flex;
      gap: 6px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      font-family: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .row-actions button,
    .add-form button {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 6px 12px;
      font-size: 0.8rem;
    }

    .habit-delete {
      color: #c63b2b;
    }

    .calendar-head {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
      font-size: 0.72rem;
      color: #8b857d;
      text-align: center;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .calendar-days {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
      margin-top: 4px;
    }

    .day {
      aspect-ratio: 1;
      display: grid;
      place-items: center;
      border-radius: 10px;
      background: rgba(47, 72, 88, 0.06);
      color: var(--accent-2);
      font-size: 0.82rem;
      padding: 0;
    }

    .day.blank {
      background: transparent;
    }

    .day.done {
      background: var(--accent);
      color: white;
      box-shadow: 0 6px 14px rgba(255, 107, 74, 0.3);
    }

    .day.today {
      outline: 2px solid var(--accent-2);
      outline-offset: 1px;
    }

    .day.inactive {
      color: #b7b1a9;
      cursor: default;
    }

    .add-form {
      display: flex;
      gap: 8px;
    }

    .add-form input {
      flex: 1;
      min-width: 0;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 999px;
      padding: 10px 16px;
      font-family: inherit;
      font-size: 0.95rem;
    }

    .add-form button {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      padding: 10px 18px;
      font-size: 0.95rem;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="page">
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">{{MONTH_TITLE}} &middot; tap a day to mark it done.</p>
      </div>
      <nav class="links">
        <a href="/">Wheel</a>
        <a class="active" href="/habits">Habits</a>
      </nav>
    </header>

    <section class="habit-cards" id="habits">{{HABIT_CARDS}}</section>

    <form class="add-form" id="habit-form">
      <input id="habit-name" name="name" placeholder="New habit name" autocomplete="off" />
      <button type="submit">Add habit</button>
    </form>

    <div class="status" id="status"></div>
    <p class="hint">Days up to today can be toggled. The grid starts on Monday.</p>
  </main>

  <script>
    const habitsEl = document.getElementById('habits');
    const habitForm = document.getElementById('habit-form');
    const habitNameEl = document.getElementById('habit-name');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showError = (err) => setStatus(err.message, 'error');

    const setSaved = () => {
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const post = (url, body) =>
      request(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const renderDays = (card, habit) => {
      const cells = [];
      for (let i = 0; i < habit.leading_blanks; i += 1) {
        cells.push('<span class="day blank"></span>');
      }
      habit.days.forEach((day) => {
        const classes = ['day'];
        if (day.today) {
          classes.push('today');
        }
        if (day.completed) {
          classes.push('done');
        }
        if (!day.clickable) {
          classes.push('inactive');
        }
        cells.push(
          `<button type="button" class="${classes.join(' ')}" data-date="${day.date}"${day.clickable ? '' : ' disabled'}>${day.day}</button>`
        );
      });
      card.querySelector('.calendar-days').innerHTML = cells.join('');
    };

    habitsEl.addEventListener('click', (event) => {
      const button = event.target.closest('button');
      if (!button) {
        return;
      }
      const card = button.closest('.habit-card');
      if (!card) {
        return;
      }
      const habitId = card.dataset.habitId;

      if (button.classList.contains('day')) {
        post(`/api/habits/${habitId}/days`, { date: button.dataset.date })
          .then((habit) => {
            renderDays(card, habit);
            setSaved();
          })
          .catch(showError);
      } else if (button.classList.contains('habit-rename')) {
        const name = prompt('Rename habit', card.dataset.name);
        if (name === null) {
          return;
        }
        post(`/api/habits/${habitId}/name`, { name })
          .then((habit) => {
            card.dataset.name = habit.name;
            card.querySelector('.habit-name').textContent = habit.name;
            setSaved();
          })
          .catch(showError);
      } else if (button.classList.contains('habit-delete')) {
        if (!confirm('Delete this habit?')) {
          return;
        }
        request(`/api/habits/${habitId}`, { method: 'DELETE' })
          .then(() => location.reload())
          .catch(showError);
      }
    });

    habitForm.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/habits', { name: habitNameEl.value })
        .then(() => location.reload())
        .catch(showError);
    });
  </script>
</body>
</html>
"#;
