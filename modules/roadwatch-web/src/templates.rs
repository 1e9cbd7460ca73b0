use roadwatch_map::panel::{WELCOME_PARAGRAPHS, WELCOME_TITLE};
use roadwatch_map::{PanelContent, RoadDetails};

/// Render the map page. Everything on it is driven by commands from `/api/session/*`.
pub fn render_map() -> String {
    let content = r##"
<div id="map"></div>
<aside id="info-panel" class="info-panel hidden">
    <button id="close-btn" class="close-btn" aria-label="Close">&times;</button>
    <div id="info-content"></div>
</aside>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script>
const map = L.map('map', { zoomControl: true, maxBoundsViscosity: 1.0, worldCopyJump: false });
L.tileLayer('https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png', {
    attribution: '&copy; OpenStreetMap contributors &copy; CARTO',
    subdomains: 'abcd',
    maxZoom: 19,
    minZoom: 10,
}).addTo(map);
L.control.scale({ position: 'bottomleft', metric: true, imperial: false }).addTo(map);

const shapes = new Map();
const markers = new Map();
const panel = document.getElementById('info-panel');
const content = document.getElementById('info-content');
const header = document.getElementById('road-count');
const input = document.getElementById('search-input');
const button = document.getElementById('search-btn');
const toLatLng = p => [p.lat, p.lng];
const toBounds = b => [toLatLng(b.south_west), toLatLng(b.north_east)];

function post(path, body) {
    return fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body || {}),
    })
        .then(r => (r.ok ? r.json() : []))
        .then(apply);
}

// Session updates run one at a time, in the order the map raised them.
let queue = Promise.resolve();
function enqueue(path, body) {
    queue = queue.then(() => post(path, body)).catch(() => {});
    return queue;
}

const sendEvent = event => enqueue('/api/session/event', event);

function apply(commands) {
    for (const c of commands) {
        switch (c.type) {
            case 'init_viewport':
                map.setMaxBounds(toBounds(c.viewport.max_bounds));
                map.setMinZoom(c.viewport.min_zoom);
                map.setMaxZoom(c.viewport.max_zoom);
                map.setView(toLatLng(c.viewport.center), c.viewport.zoom);
                break;
            case 'draw_line': {
                const line = L.polyline(c.points.map(toLatLng), c.style).addTo(map);
                line.bindTooltip(c.tooltip, { direction: 'top', className: 'road-tooltip' });
                line.on('mouseover', () => sendEvent({ type: 'hover_in', shape: c.shape }));
                line.on('mouseout', () => sendEvent({ type: 'hover_out', shape: c.shape }));
                line.on('click', () => sendEvent({ type: 'click', shape: c.shape }));
                shapes.set(c.shape, line);
                break;
            }
            case 'set_style':
                shapes.get(c.shape)?.setStyle(c.style);
                break;
            case 'fit_bounds':
                map.fitBounds(toBounds(c.bounds), { padding: [c.padding, c.padding], maxZoom: c.max_zoom });
                break;
            case 'set_view':
                map.setView(toLatLng(c.center), c.zoom);
                break;
            case 'add_marker': {
                const marker = L.marker(toLatLng(c.at)).addTo(map);
                marker.bindPopup(c.popup).openPopup();
                setTimeout(() => marker.closePopup(), c.popup_ttl_ms);
                markers.set(c.marker, marker);
                break;
            }
            case 'remove_marker': {
                const marker = markers.get(c.marker);
                if (marker) {
                    map.removeLayer(marker);
                    markers.delete(c.marker);
                }
                break;
            }
            case 'show_panel':
                content.innerHTML = c.html;
                panel.classList.remove('hidden');
                break;
            case 'hide_panel':
                panel.classList.add('hidden');
                break;
            case 'set_header':
                header.textContent = c.text;
                break;
            case 'alert':
                alert(c.message);
                break;
            case 'set_search_busy':
                button.disabled = c.busy;
                button.textContent = c.busy ? 'Searching...' : 'Search';
                break;
            case 'clear_search_input':
                input.value = '';
                break;
        }
    }
}

function search() {
    post('/api/session/search', { query: input.value }).catch(() => {});
}

document.getElementById('close-btn').addEventListener('click', () => sendEvent({ type: 'close_panel' }));
document.getElementById('contribute-link').addEventListener('click', e => {
    e.preventDefault();
    post('/api/session/contribute');
});
button.addEventListener('click', search);
input.addEventListener('keypress', e => {
    if (e.key === 'Enter') search();
});

enqueue('/api/session/init');
</script>
"##;

    build_page("Road Transparency Map", content)
}

/// Render the info panel body.
pub fn render_panel(content: &PanelContent) -> String {
    match content {
        PanelContent::Road(details) => render_road_details(details),
        PanelContent::Welcome => render_welcome(),
    }
}

fn render_road_details(d: &RoadDetails) -> String {
    let description = d
        .description
        .as_deref()
        .map(|text| {
            format!(
                r#"<div class="detail-section"><h3 class="section-title">Description</h3><p class="description-text">{}</p></div>"#,
                html_escape(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="road-header">
    <h2 class="road-name">{name}</h2>
    <p class="road-id">ID: {id}</p>
</div>
<div class="detail-section">
    <h3 class="section-title">Tender Information</h3>
    <div class="detail-grid">{tender_id}{cost}</div>
</div>
<div class="detail-section">
    <h3 class="section-title">Contractor Details</h3>
    <div class="detail-grid">{contractor}</div>
</div>
<div class="detail-section">
    <h3 class="section-title">Project Timeline</h3>
    <div class="detail-grid">{build}{completion}{duration}{length}</div>
</div>
{description}"#,
        name = html_escape(&d.name),
        id = html_escape(&d.id),
        tender_id = detail_item("Tender ID", &d.tender_id, ""),
        cost = detail_item("Project Cost", &d.cost, " cost"),
        contractor = detail_item("Contractor Name", &d.contractor, ""),
        build = detail_item("Build Date", &d.build_date, ""),
        completion = detail_item("Completion Date", &d.completion_date, ""),
        duration = detail_item("Duration", &d.duration, ""),
        length = detail_item("Road Length", &d.length, ""),
    )
}

fn detail_item(label: &str, value: &str, extra_class: &str) -> String {
    format!(
        r#"<div class="detail-item"><span class="detail-label">{label}</span><span class="detail-value{extra_class}">{value}</span></div>"#,
        value = html_escape(value),
    )
}

fn render_welcome() -> String {
    let paragraphs: String = WELCOME_PARAGRAPHS
        .iter()
        .map(|p| format!(r#"<p class="description-text">{}</p>"#, html_escape(p)))
        .collect();

    format!(
        r#"<div class="road-header"><h2 class="road-name">{title}</h2></div>
<div class="detail-section">{paragraphs}</div>"#,
        title = html_escape(WELCOME_TITLE),
    )
}

/// Popup shown on the search marker.
pub fn render_marker_popup(name: &str) -> String {
    format!(
        r#"<div style="text-align:center;"><strong>📍 {}</strong><br><small>Searched location</small></div>"#,
        html_escape(name)
    )
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.header{{background:#1a1a1a;color:#fff;padding:12px 24px;display:flex;align-items:center;justify-content:space-between;gap:16px;height:56px;}}
.header h1{{font-size:18px;font-weight:600;}}
.header .stats{{font-size:13px;color:#ccc;}}
.header a{{color:#ccc;text-decoration:none;font-size:14px;}}
.header a:hover{{color:#fff;}}
.search{{display:flex;gap:6px;}}
.search input{{padding:6px 10px;border-radius:4px;border:1px solid #444;font-size:13px;width:220px;}}
.search button{{padding:6px 14px;background:#2563eb;color:#fff;border:none;border-radius:4px;font-size:13px;cursor:pointer;}}
.search button:disabled{{background:#64748b;cursor:wait;}}
#map{{height:calc(100vh - 56px);}}
.info-panel{{position:absolute;top:72px;right:16px;width:340px;max-height:calc(100vh - 96px);overflow-y:auto;background:#fff;border-radius:8px;box-shadow:0 4px 16px rgba(0,0,0,0.15);padding:20px;z-index:1000;}}
.info-panel.hidden{{display:none;}}
.close-btn{{position:absolute;top:8px;right:12px;border:none;background:none;font-size:22px;cursor:pointer;color:#888;}}
.road-header{{margin-bottom:16px;}}
.road-name{{font-size:18px;}}
.road-id{{font-size:12px;color:#888;}}
.detail-section{{margin-top:14px;padding-top:12px;border-top:1px solid #eee;}}
.section-title{{font-size:13px;color:#666;text-transform:uppercase;margin-bottom:8px;}}
.detail-grid{{display:grid;grid-template-columns:1fr 1fr;gap:8px;}}
.detail-item{{display:flex;flex-direction:column;}}
.detail-label{{font-size:11px;color:#888;}}
.detail-value{{font-size:14px;color:#333;}}
.detail-value.cost{{color:#b91c1c;font-weight:600;}}
.description-text{{font-size:14px;color:#444;line-height:1.5;margin-bottom:8px;}}
.road-tooltip{{font-size:12px;}}
</style>
</head>
<body>
<div class="header">
    <h1>{title}</h1>
    <span id="road-count" class="stats">Loading roads...</span>
    <div class="search">
        <input id="search-input" type="text" placeholder="Search an area">
        <button id="search-btn">Search</button>
    </div>
    <a href="#" id="contribute-link">Contribute</a>
</div>
{content}
</body>
</html>"##,
        title = html_escape(title),
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
