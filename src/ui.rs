use crate::models::{ProgressResponse, TrackingMode};

pub fn render_index(progress: &ProgressResponse) -> String {
    let controls = match progress.mode {
        TrackingMode::Binary => BINARY_CONTROLS,
        TrackingMode::TriState => TRISTATE_HINT,
    };
    INDEX_HTML
        .replace("{{CONTROLS}}", controls)
        .replace("{{DATE}}", &progress.date)
        .replace("{{MODE}}", &progress.mode.to_string())
        .replace("{{CURRENT}}", &progress.current_streak.to_string())
        .replace("{{BEST}}", &progress.best_streak.to_string())
}

const BINARY_CONTROLS: &str = r#"<section class="actions">
      <form id="mark-form" method="post" action="/today/mark">
        <button class="btn-mark" type="submit">Mark today successful</button>
      </form>
      <form id="reset-form" method="post" action="/streak/reset">
        <button class="btn-reset" type="submit">Reset current streak</button>
      </form>
    </section>"#;

const TRISTATE_HINT: &str = r#"<p class="hint">Click a day to cycle it: success, missed, then unmarked.</p>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Streak Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ec;
      --bg-2: #bfe0c4;
      --ink: #26302a;
      --success: #2d9b5a;
      --missed: #d2513c;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e6 60%, #f4f8f2 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      width: 100%;
      color: white;
    }

    .btn-mark {
      background: var(--success);
    }

    .btn-reset {
      background: var(--accent-2);
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-day {
      aspect-ratio: 1;
      border-radius: 12px;
      display: grid;
      place-items: center;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      color: #a19b94;
    }

    .calendar-day.day-header {
      background: transparent;
      border: none;
      font-weight: 600;
      color: #6b645d;
    }

    .calendar-day.empty {
      visibility: hidden;
    }

    .calendar-day.selectable {
      color: var(--ink);
      cursor: pointer;
    }

    .calendar-day.today {
      outline: 2px solid var(--accent-2);
    }

    .calendar-day.success {
      background: var(--success);
      color: white;
    }

    .calendar-day.missed {
      background: var(--missed);
      color: white;
    }

    .status {
      min-height: 1.2em;
      color: #6b645d;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="warn"] {
      color: #b5651d;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    .sr-only {
      position: absolute;
      width: 1px;
      height: 1px;
      overflow: hidden;
      clip: rect(0, 0, 0, 0);
    }
  </style>
</head>
<body>
  <main class="app" data-mode="{{MODE}}">
    <header>
      <h1>Streak Tracker</h1>
      <p class="subtitle">Today is <span id="date">{{DATE}}</span>.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="current-streak" class="value">{{CURRENT}}</span>
      </div>
      <div class="stat">
        <span class="label">Best streak</span>
        <span id="best-streak" class="value">{{BEST}}</span>
      </div>
    </section>

    {{CONTROLS}}

    <section>
      <h2 id="month-title"></h2>
      <div class="calendar" id="calendar"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const currentEl = document.getElementById('current-streak');
    const bestEl = document.getElementById('best-streak');
    const dateEl = document.getElementById('date');
    const calendarEl = document.getElementById('calendar');
    const monthTitleEl = document.getElementById('month-title');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateCounters = (progress) => {
      dateEl.textContent = progress.date;
      currentEl.textContent = progress.current_streak;
      bestEl.textContent = progress.best_streak;
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderCalendar = (calendar) => {
      monthTitleEl.textContent = `${calendar.month_name} ${calendar.year}`;
      calendarEl.innerHTML = '';

      calendar.weekdays.forEach((name) => {
        const header = document.createElement('div');
        header.className = 'calendar-day day-header';
        header.textContent = name.charAt(0);
        const full = document.createElement('span');
        full.className = 'sr-only';
        full.textContent = name;
        header.appendChild(full);
        calendarEl.appendChild(header);
      });

      for (let i = 0; i < calendar.leading_blanks; i += 1) {
        const blank = document.createElement('div');
        blank.className = 'calendar-day empty';
        calendarEl.appendChild(blank);
      }

      calendar.days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = 'calendar-day';
        cell.textContent = day.day;
        if (day.selectable) {
          cell.classList.add('selectable');
          cell.addEventListener('click', () => {
            toggleDay(day.date).catch((err) => setStatus(err.message, 'error'));
          });
        }
        if (day.is_today) {
          cell.classList.add('today');
        }
        if (day.status !== 'unmarked') {
          cell.classList.add(day.status);
        }
        calendarEl.appendChild(cell);
      });
    };

    const refresh = async () => {
      const [progress, calendar] = await Promise.all([
        request('GET', '/api/progress'),
        request('GET', '/api/calendar')
      ]);
      updateCounters(progress);
      renderCalendar(calendar);
    };

    const toggleDay = async (date) => {
      const result = await request('POST', '/api/days/toggle', { date });
      if (result.warning) {
        setStatus(result.warning, 'warn');
      } else {
        setStatus('', '');
      }
      await refresh();
    };

    const markForm = document.getElementById('mark-form');
    const resetForm = document.getElementById('reset-form');

    if (markForm) {
      markForm.addEventListener('submit', (event) => {
        event.preventDefault();
        request('POST', '/api/today/mark')
          .then(() => refresh())
          .then(() => setStatus('Today marked', ''))
          .catch((err) => setStatus(err.message, 'error'));
      });
    }

    if (resetForm) {
      resetForm.addEventListener('submit', (event) => {
        event.preventDefault();
        if (!confirm('Are you sure you want to reset your current streak?')) {
          return;
        }
        request('POST', '/api/streak/reset')
          .then(() => refresh())
          .catch((err) => setStatus(err.message, 'error'));
      });
    }

    window.addEventListener('focus', () => {
      request('POST', '/api/check-day')
        .then(() => refresh())
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
