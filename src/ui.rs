use crate::models::TodayResponse;

pub fn render_index(today: &TodayResponse, quote: &str) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &today.date)
        .replace("{{TODAY_HOURS}}", &format!("{:.1}", today.hours))
        .replace("{{GOAL}}", &format!("{:.0}", today.goal))
        .replace("{{PROGRESS_PCT}}", &format!("{:.0}", today.progress * 100.0))
        .replace("{{QUOTE}}", quote)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Study Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f6ef;
      --bg-2: #cfe3d8;
      --ink: #26302b;
      --accent: #3f8f6b;
      --accent-2: #2f4858;
      --warm: #f2b134;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4efe2 60%, #f2f5ec 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6660;
      font-size: 1rem;
    }

    .layout {
      display: grid;
      grid-template-columns: minmax(240px, 320px) 1fr;
      gap: 24px;
      align-items: start;
    }

    .form-card {
      background: white;
      border-radius: 20px;
      padding: 22px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .form-card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #87918a;
    }

    .field input,
    .field select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: #fbfcfa;
      color: var(--ink);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
      align-content: start;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #87918a;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.goal {
      color: var(--accent);
    }

    .stat .sub {
      font-size: 0.9rem;
      color: #6b756e;
    }

    .progress-track {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), var(--warm));
      transition: width 300ms ease;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-log {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(63, 143, 107, 0.3);
    }

    .badges h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .badge-strip {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
    }

    .badge {
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 16px 22px;
      text-align: center;
      display: grid;
      gap: 4px;
      min-width: 140px;
    }

    .badge .badge-emoji {
      font-size: 2em;
    }

    .badge .badge-name {
      font-weight: 600;
    }

    .badge .badge-days {
      font-size: 0.85rem;
      color: #87918a;
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b7570;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .chart-card h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .chart-card svg {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-card svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #79837c;
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 10px 18px;
      font-size: 0.9rem;
      color: #5c6660;
    }

    .legend .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7570;
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
      color: #6f7a72;
      font-size: 0.9rem;
    }

    .quote {
      margin: 0;
      font-style: italic;
      color: #4a564f;
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

    @media (max-width: 720px) {
      .app {
        padding: 28px 22px;
      }
      .layout {
        grid-template-columns: 1fr;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>📚 Study Habit Tracker</h1>
      <p class="subtitle">Log each session, keep the streak alive, watch the hours add up.</p>
    </header>

    <section class="layout">
      <form id="log-form" class="form-card" method="post" action="/log">
        <h2>📝 Log your study</h2>
        <div class="field">
          <label for="subject">Subject / topic</label>
          <input id="subject" name="subject" type="text" placeholder="What did you study?" />
        </div>
        <div class="field">
          <label for="hours">Hours studied</label>
          <input id="hours" name="hours" type="number" min="0.5" step="0.5" value="1" />
        </div>
        <div class="field">
          <label for="mood">How do you feel?</label>
          <select id="mood" name="mood">
            <option>😃 Great</option>
            <option>🙂 Good</option>
            <option>😐 Okay</option>
            <option>😓 Tired</option>
          </select>
        </div>
        <button class="btn-log" type="submit">Add Log</button>
        <div class="status" id="status"></div>
      </form>

      <div class="panel">
        <div class="stat">
          <span class="label">📅 Today ({{DATE}})</span>
          <span class="value goal"><span id="today-hours">{{TODAY_HOURS}}</span> h</span>
          <span class="sub" id="today-delta">of {{GOAL}} h goal</span>
          <div class="progress-track">
            <div class="progress-fill" id="progress-fill" style="width: {{PROGRESS_PCT}}%"></div>
          </div>
        </div>
        <div class="stat">
          <span class="label">🔥 Current streak</span>
          <span class="value" id="current-streak">--</span>
          <span class="sub">consecutive days</span>
        </div>
        <div class="stat">
          <span class="label">🏆 Best streak</span>
          <span class="value" id="best-streak">--</span>
          <span class="sub">your record</span>
        </div>
      </div>
    </section>

    <section class="badges">
      <h2>🎖️ Your badges</h2>
      <div class="badge-strip" id="badge-strip">
        <p class="hint">Keep studying to earn badges! Complete 3 consecutive days to get your first badge.</p>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2>📈 Your progress</h2>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-window="all" role="tab" aria-selected="true">All time</button>
          <button class="tab" type="button" data-window="month" role="tab" aria-selected="false">This month</button>
          <button class="tab" type="button" data-window="week" role="tab" aria-selected="false">This week</button>
        </div>
      </div>
      <div class="chart-card">
        <h3>📊 Hours by subject</h3>
        <svg id="subject-chart" viewBox="0 0 600 260" aria-label="Hours by subject" role="img"></svg>
      </div>
      <div class="chart-card">
        <h3>📅 Daily study time</h3>
        <svg id="daily-chart" viewBox="0 0 600 260" aria-label="Hours by day" role="img"></svg>
      </div>
      <div class="chart-card">
        <h3>🥧 Subject distribution</h3>
        <svg id="share-chart" viewBox="0 0 600 260" aria-label="Subject share" role="img"></svg>
        <div class="legend" id="share-legend"></div>
      </div>
    </section>

    <p class="quote">{{QUOTE}}</p>
    <p class="hint">Refresh the page for a new quote. Hours are kept per calendar day (server time).</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const todayHoursEl = document.getElementById('today-hours');
    const todayDeltaEl = document.getElementById('today-delta');
    const progressFillEl = document.getElementById('progress-fill');
    const currentStreakEl = document.getElementById('current-streak');
    const bestStreakEl = document.getElementById('best-streak');
    const badgeStripEl = document.getElementById('badge-strip');
    const subjectChartEl = document.getElementById('subject-chart');
    const dailyChartEl = document.getElementById('daily-chart');
    const shareChartEl = document.getElementById('share-chart');
    const shareLegendEl = document.getElementById('share-legend');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const form = document.getElementById('log-form');
    const subjectInput = document.getElementById('subject');
    const hoursInput = document.getElementById('hours');
    const moodInput = document.getElementById('mood');

    const PALETTE = ['#3f8f6b', '#2f4858', '#f2b134', '#c65f4a', '#8e6fb8', '#4a7c9b'];

    let statsData = null;
    let activeWindow = 'all';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatHours = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const updateToday = (data) => {
      todayHoursEl.textContent = data.hours.toFixed(1);
      const delta = data.hours - data.goal;
      const sign = delta >= 0 ? '+' : '';
      todayDeltaEl.textContent = `of ${formatHours(data.goal)} h goal (${sign}${delta.toFixed(1)})`;
      progressFillEl.style.width = `${Math.round(data.progress * 100)}%`;
    };

    const emptyChart = (svg, message) => {
      svg.innerHTML = `<text class="chart-label" x="50%" y="50%" text-anchor="middle">${message}</text>`;
    };

    const gridLines = (min, max, y, width, paddingX) => {
      const ticks = 4;
      const range = max - min;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatHours(value)}</text>`;
      }
      return grid;
    };

    const renderBarChart = (svg, items) => {
      if (!items.length) {
        emptyChart(svg, 'No data to display yet');
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const max = Math.max(...items.map((item) => item.value), 1);
      const y = (value) => height - paddingY - ((value / max) * (height - top - paddingY));
      const slot = (width - paddingX * 2) / items.length;
      const barWidth = Math.min(slot * 0.6, 70);

      let bars = '';
      items.forEach((item, index) => {
        const x = paddingX + slot * index + (slot - barWidth) / 2;
        const yPos = y(item.value);
        const color = PALETTE[index % PALETTE.length];
        bars += `<rect x="${x.toFixed(2)}" y="${yPos.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${(height - paddingY - yPos).toFixed(2)}" rx="6" fill="${color}" />`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(2)}" y="${(yPos - 8).toFixed(2)}" text-anchor="middle">${formatHours(item.value)}</text>`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(2)}" y="${height - paddingY + 18}" text-anchor="middle">${item.label}</text>`;
      });

      svg.innerHTML = `${gridLines(0, max, y, width, paddingX)}${bars}`;
    };

    const renderLineChart = (svg, points) => {
      if (!points.length) {
        emptyChart(svg, 'No data to display yet');
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const min = 0;
      let max = Math.max(...points.map((point) => point.value), 1);

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      svg.innerHTML = `
        ${gridLines(min, max, y, width, paddingX)}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const renderPieChart = (svg, legendEl, items) => {
      legendEl.innerHTML = '';
      if (!items.length) {
        emptyChart(svg, 'No data to display yet');
        return;
      }

      const cx = 300;
      const cy = 130;
      const outer = 96;
      const inner = outer * 0.3;
      const total = items.reduce((acc, item) => acc + item.value, 0);

      const polar = (radius, angle) => [cx + radius * Math.cos(angle), cy + radius * Math.sin(angle)];

      const slicePath = (startFrac, endFrac) => {
        const a0 = startFrac * 2 * Math.PI - Math.PI / 2;
        const a1 = endFrac * 2 * Math.PI - Math.PI / 2;
        const large = endFrac - startFrac > 0.5 ? 1 : 0;
        const [x0, y0] = polar(outer, a0);
        const [x1, y1] = polar(outer, a1);
        const [x2, y2] = polar(inner, a1);
        const [x3, y3] = polar(inner, a0);
        return `M ${x0.toFixed(2)} ${y0.toFixed(2)} ` +
          `A ${outer} ${outer} 0 ${large} 1 ${x1.toFixed(2)} ${y1.toFixed(2)} ` +
          `L ${x2.toFixed(2)} ${y2.toFixed(2)} ` +
          `A ${inner} ${inner} 0 ${large} 0 ${x3.toFixed(2)} ${y3.toFixed(2)} Z`;
      };

      let shapes = '';
      let cursor = 0;
      items.forEach((item, index) => {
        const fraction = item.value / total;
        const color = PALETTE[index % PALETTE.length];
        if (fraction >= 0.999) {
          const mid = (outer + inner) / 2;
          shapes += `<circle cx="${cx}" cy="${cy}" r="${mid}" fill="none" stroke="${color}" stroke-width="${outer - inner}" />`;
        } else {
          shapes += `<path d="${slicePath(cursor, cursor + fraction)}" fill="${color}" />`;
        }
        cursor += fraction;

        const pct = Math.round(fraction * 100);
        const entry = document.createElement('span');
        entry.innerHTML = `<span class="swatch" style="background:${color}"></span>${item.label} — ${formatHours(item.value)} h (${pct}%)`;
        legendEl.appendChild(entry);
      });

      svg.innerHTML = shapes;
    };

    const renderBadges = (badges) => {
      if (!badges.length) {
        badgeStripEl.innerHTML =
          '<p class="hint">Keep studying to earn badges! Complete 3 consecutive days to get your first badge.</p>';
        return;
      }
      badgeStripEl.innerHTML = badges
        .map(
          (badge) => `
            <div class="badge">
              <span class="badge-emoji">${badge.emoji}</span>
              <span class="badge-name">${badge.name}</span>
              <span class="badge-days">${badge.days}-day streak</span>
            </div>`
        )
        .join('');
    };

    const renderStats = () => {
      if (!statsData) {
        return;
      }
      currentStreakEl.textContent = `${statsData.current_streak} days`;
      bestStreakEl.textContent = `${statsData.best_streak} days`;
      renderBadges(statsData.badges);
      renderBarChart(
        subjectChartEl,
        statsData.subject_totals.map((entry) => ({ label: entry.subject, value: entry.hours }))
      );
      renderLineChart(
        dailyChartEl,
        statsData.daily_totals.map((entry) => ({ label: entry.date.slice(5), value: entry.hours }))
      );
      renderPieChart(
        shareChartEl,
        shareLegendEl,
        statsData.subject_totals.map((entry) => ({ label: entry.subject, value: entry.hours }))
      );
    };

    const setActiveWindow = (next) => {
      activeWindow = next;
      tabs.forEach((button) => {
        const isActive = button.dataset.window === next;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      loadStats().catch((err) => setStatus(err.message, 'error'));
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today data');
      }
      updateToday(await res.json());
    };

    const loadStats = async () => {
      const res = await fetch(`/api/stats?window=${activeWindow}`);
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      statsData = await res.json();
      renderStats();
    };

    const refresh = async () => {
      await Promise.all([loadToday(), loadStats()]);
    };

    const submitEntry = async () => {
      const subject = subjectInput.value.trim();
      if (!subject) {
        setStatus('Enter a subject first', 'error');
        return;
      }

      setStatus('Saving...', 'info');
      const res = await fetch('/api/log', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          subject,
          hours: Number(hoursInput.value),
          mood: moodInput.value
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      updateToday(await res.json());
      loadStats().catch((err) => setStatus(err.message, 'error'));
      subjectInput.value = '';
      setStatus('Study session logged! 🎉', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveWindow(button.dataset.window));
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      submitEntry().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
