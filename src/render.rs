//! Builds the single marketing page. One route, one HTML document; styles
//! and the form script are inlined so the server needs no asset pipeline.

const PAGE_CSS: &str = r##"
:root{--bg:#0f172a;--panel:#1e293b;--panel-soft:rgba(30,41,59,.5);--border:#334155;--text:#f8fafc;--muted:#94a3b8;--accent:#a855f7;--accent-dark:#9333ea;--danger:#f87171;--ok:#4ade80}
*{box-sizing:border-box;margin:0;padding:0}
body{background:var(--bg);color:var(--text);font-family:system-ui,-apple-system,'Segoe UI',sans-serif;line-height:1.6}
header{position:sticky;top:0;z-index:50;display:flex;align-items:center;justify-content:space-between;padding:0 24px;height:64px;background:rgba(15,23,42,.85);border-bottom:1px solid rgba(51,65,85,.4);backdrop-filter:blur(8px)}
header a.brand{font-size:24px;font-weight:700;color:var(--text);text-decoration:none}
header a.cta{color:var(--accent);text-decoration:none;font-weight:600}
section{padding:80px 24px}
.wrap{max-width:1024px;margin:0 auto}
.hero{text-align:center;padding:120px 24px}
.hero .kicker{color:var(--accent);letter-spacing:.1em;text-transform:uppercase;font-weight:600;margin-bottom:24px}
.hero h1{font-size:clamp(2.25rem,6vw,4.5rem);line-height:1.1}
.hero p.lead{max-width:750px;margin:24px auto 0;color:#cbd5e1;font-size:1.25rem}
h2{font-size:2rem;text-align:center}
h2 span{color:var(--accent)}
p.sub{max-width:800px;margin:16px auto 0;text-align:center;color:var(--muted)}
.cards{display:grid;gap:24px;margin-top:48px;grid-template-columns:repeat(auto-fit,minmax(260px,1fr))}
.card{background:var(--panel);border:1px solid var(--border);border-radius:12px;padding:24px}
.card h3{font-size:1.25rem;margin-bottom:8px}
.card p,.card li{color:var(--muted);font-size:.9rem}
.card ul{margin-top:12px;padding-left:20px}
.alt{background:var(--panel-soft)}
.contact-box{max-width:512px;margin:48px auto 0;background:var(--panel);border-radius:12px;padding:32px}
.field{margin-bottom:24px}
.field label{display:block;color:#cbd5e1;margin-bottom:4px;font-size:.9rem}
.field input,.field textarea{width:100%;padding:10px 12px;border-radius:6px;border:1px solid #475569;background:#334155;color:var(--text);font:inherit}
.field .err{display:none;color:var(--danger);font-size:.85rem;margin-top:4px}
button[type=submit]{width:100%;padding:12px;border:0;border-radius:6px;background:var(--accent-dark);color:#fff;font-size:1.1rem;font-weight:600;cursor:pointer}
button[type=submit]:disabled{opacity:.6;cursor:wait}
#form-message{display:none;margin-top:16px;padding:12px;border-radius:6px;font-size:.9rem}
#form-message.ok{display:block;background:rgba(74,222,128,.12);color:var(--ok)}
#form-message.fail{display:block;background:rgba(248,113,113,.12);color:var(--danger)}
.honey{display:none}
"##;

// Minimal form controller: disable the button in flight, paint per-field
// errors, show the outcome message, reset fields on success. Server strings
// go through textContent, never innerHTML.
const FORM_JS: &str = r#"
var form=document.getElementById('partnership-form');
form.addEventListener('submit',function(ev){
  ev.preventDefault();
  var btn=form.querySelector('button[type=submit]');
  var msg=document.getElementById('form-message');
  btn.disabled=true;btn.textContent='Submitting...';
  msg.className='';msg.textContent='';
  form.querySelectorAll('.err').forEach(function(e){e.style.display='none';e.textContent='';});
  fetch('/contact',{method:'POST',body:new URLSearchParams(new FormData(form))})
    .then(function(r){return r.json();})
    .then(function(res){
      msg.textContent=res.message;
      msg.className=res.success?'ok':'fail';
      if(res.errors){
        Object.keys(res.errors).forEach(function(field){
          var el=document.getElementById('err-'+field);
          if(el){el.textContent=res.errors[field][0];el.style.display='block';}
        });
      }
      if(res.success){form.reset();}
    })
    .catch(function(){
      msg.textContent='Something went wrong. Please try again.';
      msg.className='fail';
    })
    .finally(function(){btn.disabled=false;btn.textContent='Contact Us';});
});
"#;

fn hero() -> String {
    r#"<section class="hero">
<p class="kicker">Hire an AI-first dev team</p>
<h1>Accelerate Software Development. Disrupt Markets with AI.</h1>
<p class="lead">Periscoped deploys elite, AI-augmented teams to build your market-disrupting software and operational systems, amplifying your competitive advantage with unparalleled speed and quality.</p>
</section>"#
        .to_string()
}

fn ai_advantage() -> String {
    r#"<section id="ai-advantage" class="alt"><div class="wrap">
<h2>The AI Edge: <span>Your Catalyst for Market Leadership</span></h2>
<p class="sub">In today's hyper-competitive landscape, AI is not just an option. It is the engine for exponential growth and market disruption. We help you harness its power.</p>
<div class="cards">
<div class="card"><h3>Capitalize on AI Trends</h3><p>From Generative AI to advanced automation, we integrate cutting-edge trends into your solutions, ensuring you're not just current, but ahead of the curve.</p></div>
<div class="card"><h3>Accelerate Market Entry</h3><p>Our AI-augmented development processes drastically reduce time-to-market, allowing you to seize opportunities faster than your competition.</p></div>
<div class="card"><h3>Enhance Competitive Advantage</h3><p>We build bespoke "AI execution engines" that provide unique capabilities, creating sustainable differentiation and market dominance.</p></div>
</div></div></section>"#
        .to_string()
}

fn approach() -> String {
    r#"<section id="our-approach"><div class="wrap">
<h2>Engineered for <span>Speed &amp; Strategic Impact</span></h2>
<p class="sub">Periscoped's approach is designed for one thing: delivering your disruptive vision with unparalleled velocity and precision.</p>
<div class="cards">
<div class="card"><h3>Elite AI-Augmented Teams</h3><p>Our core strength lies in our high-performance, in-house teams. We blend top-tier engineering talent with AI-powered tools and agile methodologies to build exceptional software at an accelerated pace.</p>
<ul><li>Rapid, iterative development cycles.</li><li>AI-assisted coding, testing, and deployment.</li><li>Seamless integration of advanced AI capabilities.</li></ul></div>
<div class="card"><h3>AI Execution Engines</h3><p>We don't just build applications; we architect and implement comprehensive "AI execution engines." These are the core software and operational systems that power your disruptive strategy and drive your business forward.</p>
<ul><li>Custom-built AI models and platforms.</li><li>Intelligent automation of core business processes.</li><li>Data-driven insights for continuous optimization.</li></ul></div>
</div></div></section>"#
        .to_string()
}

fn why_partner() -> String {
    r#"<section id="why-partner" class="alt"><div class="wrap">
<h2>The <span>Periscoped Difference</span>: Your Unfair Advantage</h2>
<div class="cards">
<div class="card"><h3>Boutique Focus, Maximum Impact</h3><p>As a specialized firm, we dedicate our full attention and top talent to a select number of strategic partnerships, ensuring profound results.</p></div>
<div class="card"><h3>Unmatched Agility &amp; Speed</h3><p>Our core philosophy: "Hire the team that moves the fastest." We are built for rapid execution without compromising quality.</p></div>
<div class="card"><h3>True Strategic Partnership</h3><p>We invest in your vision, aligning our success with yours. We're not just developers; we're co-architects of your market disruption.</p></div>
</div></div></section>"#
        .to_string()
}

fn contact() -> String {
    r#"<section id="contact"><div class="wrap">
<h2>Ready to Move Fastest &amp; <span>Disrupt Your Market?</span></h2>
<p class="sub">Let's discuss how Periscoped can build your AI-powered future. Initiate a strategic partnership today.</p>
<div class="contact-box">
<form id="partnership-form" method="post" action="/contact">
<div class="field"><label for="name">Full Name</label><input type="text" id="name" name="name" placeholder="Your Name" required><p class="err" id="err-name"></p></div>
<div class="field"><label for="email">Email Address</label><input type="email" id="email" name="email" placeholder="your@company.com" required><p class="err" id="err-email"></p></div>
<div class="field"><label for="company">Company Name</label><input type="text" id="company" name="company" placeholder="Your Company" required><p class="err" id="err-company"></p></div>
<div class="field"><label for="disruption_goal">Your Market Disruption Goal</label><textarea id="disruption_goal" name="disruption_goal" rows="4" placeholder="Briefly describe how you aim to disrupt your market with AI..." required></textarea><p class="err" id="err-disruption_goal"></p></div>
<div class="honey"><input type="text" name="_honey" tabindex="-1" autocomplete="off"></div>
<button type="submit">Contact Us</button>
<div id="form-message"></div>
</form>
</div></div></section>"#
        .to_string()
}

/// Assemble the full document.
pub fn homepage() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Periscoped Services - AI Consulting &amp; Implementation</title>
<meta name="description" content="We help organizations understand and optimize AI through a sequential, secure process.">
<style>{css}</style>
</head>
<body>
<header><a class="brand" href="/">Periscoped</a><a class="cta" href="#contact">Partner With Us</a></header>
<main>
{hero}
{ai_advantage}
{approach}
{why_partner}
{contact}
</main>
<script>{js}</script>
</body>
</html>"##,
        css = PAGE_CSS,
        hero = hero(),
        ai_advantage = ai_advantage(),
        approach = approach(),
        why_partner = why_partner(),
        contact = contact(),
        js = FORM_JS,
    )
}
