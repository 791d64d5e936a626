// src/web/page.rs
//! The search form page. One static page posting to the JSON API.

pub const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>JobIntel - Smart Resume Matcher</title>
<style>
  body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { font-size: 1.5rem; }
  fieldset { border: 1px solid #ccc; border-radius: 6px; margin-bottom: 1rem; }
  label { display: block; margin: 0.5rem 0 0.2rem; font-weight: bold; }
  input, select { width: 100%; max-width: 24rem; padding: 0.4rem; }
  button { margin-top: 1rem; padding: 0.6rem 1.4rem; font-size: 1rem; cursor: pointer; }
  table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
  th, td { border: 1px solid #ddd; padding: 0.4rem; text-align: left; vertical-align: top; }
  th { background: #f5f5f5; }
  #message { margin-top: 1rem; font-weight: bold; }
  .warn { color: #a66b00; }
  .ok { color: #1a7f37; }
  details pre { white-space: pre-wrap; font-family: inherit; }
</style>
</head>
<body>
<h1>JobIntel &ndash; Smart Resume Matcher</h1>

<form id="search-form">
  <fieldset>
    <legend>Upload Resume</legend>
    <label for="resume">Resume (.pdf, .docx, .txt)</label>
    <input type="file" id="resume" name="resume" accept=".pdf,.docx,.txt" required>
  </fieldset>

  <fieldset>
    <legend>Search Criteria</legend>
    <label for="role">Target Role</label>
    <input type="text" id="role" name="role" placeholder="e.g., Data Architect" required>

    <label for="location">Location</label>
    <select id="location" name="location">
      <option>All</option><option>Sydney</option><option>Melbourne</option>
      <option>Brisbane</option><option>Perth</option><option>Adelaide</option>
      <option>Canberra</option><option>Hobart</option><option>Darwin</option>
    </select>

    <label for="industry">Industry</label>
    <select id="industry" name="industry">
      <option>All</option><option>Banking and Financial Services</option>
      <option>Healthcare</option><option>Technology</option>
      <option>Retail</option><option>Government</option>
    </select>

    <label for="job_type">Job Type</label>
    <select id="job_type" name="job_type">
      <option>All</option><option>Full-time</option><option>Part-time</option>
      <option>Contract</option><option>Temporary</option>
    </select>

    <label for="salary_min">Min Salary</label>
    <input type="number" id="salary_min" name="salary_min" value="0" min="0" step="1000">

    <label for="salary_max">Max Salary</label>
    <input type="number" id="salary_max" name="salary_max" value="200000" min="0" step="1000">
  </fieldset>

  <button type="submit" id="run">Run JobIntel Agent</button>
</form>

<div id="message"></div>
<div id="downloads"></div>
<div id="results"></div>

<script>
const form = document.getElementById('search-form');
const message = document.getElementById('message');
const downloads = document.getElementById('downloads');
const results = document.getElementById('results');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  message.textContent = 'Searching for matching jobs...';
  message.className = '';
  downloads.innerHTML = '';
  results.innerHTML = '';

  const button = document.getElementById('run');
  button.disabled = true;
  try {
    const response = await fetch('/api/search', {
      method: 'POST',
      body: new FormData(form),
    });
    const body = await response.json();

    if (!body.success) {
      message.textContent = body.message || body.error || 'Search failed.';
      message.className = 'warn';
      return;
    }

    message.textContent = body.message;
    message.className = 'ok';

    if (body.export) {
      downloads.innerHTML =
        '<a href="/api/export/' + body.export.xlsx_file + '">Download Excel results</a> | ' +
        '<a href="/api/export/' + body.export.csv_file + '">Download CSV results</a>';
    }

    const rows = body.matches.map((m) => {
      const letter = document.createElement('pre');
      letter.textContent = m.cover_letter;
      return '<tr>'
        + '<td>' + escapeHtml(m.title) + '</td>'
        + '<td>' + escapeHtml(m.company) + '</td>'
        + '<td>' + escapeHtml(m.location) + '</td>'
        + '<td>' + m.score + '</td>'
        + '<td><a href="' + encodeURI(m.apply_link) + '" rel="noopener">Apply</a></td>'
        + '<td><details><summary>Cover letter</summary>' + letter.outerHTML + '</details></td>'
        + '</tr>';
    }).join('');

    results.innerHTML =
      '<table><thead><tr>'
      + '<th>Job Title</th><th>Company</th><th>Location</th>'
      + '<th>Score</th><th>Apply Link</th><th>Cover Letter</th>'
      + '</tr></thead><tbody>' + rows + '</tbody></table>';
  } catch (err) {
    message.textContent = 'Request failed: ' + err;
    message.className = 'warn';
  } finally {
    button.disabled = false;
  }
});

function escapeHtml(text) {
  const div = document.createElement('div');
  div.textContent = text || '';
  return div.innerHTML;
}
</script>
</body>
</html>
"#;
