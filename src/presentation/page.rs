// Dashboard page served at `/`. Holds the selection state client-side and asks
// `/api/tabs/{tab}` for a fresh panel on every tab or dropdown change.
pub const DASHBOARD_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>FunOlympics Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { background: #192841; color: #ffffff; font-family: sans-serif; margin: 0; }
    h1 { text-align: center; color: #83aff0; font-size: 48px; }
    #tabs { display: flex; }
    #tabs button { flex: 1; padding: 12px; border: 0; background: #3b9ebf; color: #ffffff; cursor: pointer; }
    #tabs button.active { background: #6fc0db; color: #000000; font-weight: bold; }
    #panel { padding: 20px; }
    #dropdown { width: 100%; padding: 6px; background: #6fc0db; font-weight: bold; }
    #chart { height: 70vh; }
  </style>
</head>
<body>
  <h1>FunOlympics Dashboard</h1>
  <div id="tabs"></div>
  <div id="panel">
    <select id="dropdown"></select>
    <div id="chart"></div>
  </div>
  <script>
    const selections = {};
    let active = null;
    let latestRequest = 0;

    async function show(tab, value) {
      const request = ++latestRequest;
      let url = `/api/tabs/${encodeURIComponent(tab)}`;
      if (value !== undefined) {
        url += `?value=${encodeURIComponent(value ?? "")}`;
      }
      const response = await fetch(url);
      const panel = await response.json();
      if (request !== latestRequest) {
        // A newer tab or dropdown change has been issued since
        return;
      }
      if (!response.ok) {
        console.error(panel.error);
        return;
      }
      active = tab;
      selections[tab] = panel.dropdown.value;
      renderDropdown(panel.dropdown);
      Plotly.react("chart", panel.figure.data, {
        ...panel.figure.layout,
        paper_bgcolor: "#192841",
        plot_bgcolor: "#192841",
        font: { color: "#ffffff" },
      });
      for (const button of document.querySelectorAll("#tabs button")) {
        button.classList.toggle("active", button.dataset.tab === tab);
      }
    }

    function renderDropdown(dropdown) {
      const select = document.getElementById("dropdown");
      select.replaceChildren();
      if (dropdown.clearable) {
        select.append(new Option("(all)", ""));
      }
      for (const option of dropdown.options) {
        select.append(new Option(option, option));
      }
      select.value = dropdown.value ?? "";
    }

    document.getElementById("dropdown").addEventListener("change", (event) => {
      show(active, event.target.value);
    });

    async function init() {
      const tabs = await (await fetch("/api/tabs")).json();
      const bar = document.getElementById("tabs");
      for (const tab of tabs) {
        const button = document.createElement("button");
        button.textContent = tab.label;
        button.dataset.tab = tab.value;
        button.addEventListener("click", () => {
          const remembered = tab.value in selections ? selections[tab.value] : undefined;
          show(tab.value, remembered);
        });
        bar.append(button);
      }
      show(tabs[0].value);
    }

    init();
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_panel_responses_are_dropped() {
        assert!(DASHBOARD_PAGE.contains("const request = ++latestRequest;"));
        assert!(DASHBOARD_PAGE.contains("if (request !== latestRequest)"));
    }

    #[test]
    fn test_page_fetches_tab_panels() {
        assert!(DASHBOARD_PAGE.contains("/api/tabs/${encodeURIComponent(tab)}"));
        assert!(DASHBOARD_PAGE.contains("fetch(\"/api/tabs\")"));
    }
}
