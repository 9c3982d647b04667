//! CSS for the viewer widget page.

pub const STYLE: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: #1a1a1a;
    background: #fff;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 1rem;
}

.widget-intro {
    margin: 0 0 10px 0;
    font-size: 20px;
}

.widget-controls {
    display: flex;
    gap: 10px;
    align-items: center;
    margin-bottom: 12px;
}

.widget-controls label { font-size: 14px; }

.widget-controls input[type="text"] {
    padding: 8px 10px;
    border: 1px solid #ccc;
    border-radius: 6px;
    width: 180px;
}

.btn {
    display: inline-block;
    padding: 8px 14px;
    border: 1px solid #0b5ed7;
    border-radius: 6px;
    background: #0d6efd;
    color: #fff;
    font-size: 14px;
    cursor: pointer;
    text-decoration: none;
}

.btn:hover { background: #0b5ed7; }

.thumbnail-frame {
    width: 100%;
    height: 80px;
    border: 0;
}

.iviewer-frame {
    width: 100%;
    height: 900px;
    border: 0;
}

.error-panel {
    padding: 12px 16px;
    margin-bottom: 16px;
    border-radius: 6px;
    background: #e1b4c0;
    border: 1px solid #86424b;
    color: #050505;
    font-size: 16px;
    line-height: 1.5;
}

.error-panel ul {
    margin-bottom: 12px;
    padding-left: 20px;
}
"#;
