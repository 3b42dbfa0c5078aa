use yew::prelude::*;

use crate::effects::Typewriter;
use crate::forms::contact::ContactForm;
use crate::forms::newsletter::NewsletterForm;
use crate::forms::prediction::PredictionForm;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0a0a;
                        color: #e0e0e0;
                        font-family: 'Inter', system-ui, sans-serif;
                    }

                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 10;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-brand {
                        color: #fff;
                        font-size: 1.4rem;
                        font-weight: 700;
                        text-decoration: none;
                    }

                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #ccc;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #7EB2FF;
                    }

                    .nav-link.active {
                        color: #7EB2FF;
                        font-weight: 600;
                    }

                    .navbar-toggler {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }

                    .navbar-toggler span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }

                    @media (max-width: 768px) {
                        .navbar-toggler {
                            display: flex;
                        }

                        .nav-menu {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            gap: 0;
                            background: rgba(10, 10, 10, 0.98);
                            padding: 1rem 2rem;
                        }

                        .nav-menu.mobile-menu-open {
                            display: flex;
                        }
                    }

                    section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        max-width: none;
                    }

                    .hero-background {
                        position: absolute;
                        inset: -20% 0;
                        background: radial-gradient(ellipse at top, rgba(30, 144, 255, 0.15), transparent 60%);
                        z-index: 0;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 700px;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .hero-title {
                        font-size: 3rem;
                        color: #fff;
                        min-height: 3.6rem;
                    }

                    .hero-subtitle {
                        color: #999;
                        font-size: 1.2rem;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }

                    .floating-card {
                        position: absolute;
                        padding: 1rem 1.5rem;
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        border-radius: 12px;
                        animation: float 6s ease-in-out infinite;
                    }

                    .floating-card .stat-number {
                        display: block;
                        color: #7EB2FF;
                        font-size: 1.6rem;
                        font-weight: 700;
                    }

                    .floating-card .stat-label {
                        color: #999;
                        font-size: 0.85rem;
                    }

                    .floating-card:nth-of-type(3) { top: 20%; left: 8%; }
                    .floating-card:nth-of-type(4) { top: 30%; right: 10%; }
                    .floating-card:nth-of-type(5) { bottom: 22%; left: 12%; }

                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-12px); }
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #7EB2FF;
                        font-size: 1.5rem;
                        cursor: pointer;
                        animation: bounce 2s infinite;
                        z-index: 1;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    .section-header h2 {
                        font-size: 2.4rem;
                        color: #fff;
                        text-align: center;
                    }

                    .section-header p {
                        color: #999;
                        text-align: center;
                        max-width: 600px;
                        margin: 0 auto 3rem;
                    }

                    .feature-grid, .info-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }

                    .feature-item, .info-card, .service-card {
                        padding: 2rem;
                        background: rgba(30, 30, 30, 0.5);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        transition: transform 0.25s ease, border-color 0.25s ease;
                    }

                    .feature-item h3, .info-card h3 {
                        color: #7EB2FF;
                        margin-bottom: 0.75rem;
                    }

                    .feature-item p, .info-card p {
                        color: #999;
                        line-height: 1.6;
                    }

                    .btn {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.2s ease, opacity 0.2s ease;
                    }

                    .form-group {
                        margin-bottom: 1.25rem;
                        text-align: left;
                    }

                    .form-group label {
                        display: block;
                        color: #ccc;
                        margin-bottom: 0.4rem;
                    }

                    .form-control, .newsletter-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        background: rgba(20, 20, 20, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        color: #fff;
                        font-size: 1rem;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }

                    .prediction-form, .contact-form {
                        max-width: 560px;
                        margin: 0 auto;
                    }

                    .form-progress {
                        margin-bottom: 2rem;
                    }

                    .progress-bar {
                        height: 8px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 4px;
                        overflow: hidden;
                    }

                    .progress-fill {
                        height: 100%;
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                        transition: width 0.3s ease;
                    }

                    .progress-text {
                        color: #999;
                        font-size: 0.9rem;
                        margin-top: 0.5rem;
                    }

                    .footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 3rem 2rem;
                        text-align: center;
                    }

                    .newsletter-form {
                        display: flex;
                        gap: 0.75rem;
                        max-width: 420px;
                        margin: 1.5rem auto;
                    }

                    .footer-note {
                        color: #666;
                        font-size: 0.85rem;
                    }
                "#}
            </style>

            <section id="home" class="hero-section">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <Typewriter text="Know your risk before it knows you" enabled=true />
                    <p class="hero-subtitle">
                        {"Vitalis turns routine clinical numbers into an early health-risk \
                          estimate. Fill in the assessment below and get a prediction in seconds."}
                    </p>
                    <a class="btn btn-primary" href="#predict">{"Start assessment"}</a>
                </div>
                <div class="floating-card">
                    <span class="stat-number">{"94%"}</span>
                    <span class="stat-label">{"model accuracy"}</span>
                </div>
                <div class="floating-card">
                    <span class="stat-number">{"120k"}</span>
                    <span class="stat-label">{"assessments run"}</span>
                </div>
                <div class="floating-card">
                    <span class="stat-number">{"<10s"}</span>
                    <span class="stat-label">{"to a result"}</span>
                </div>
                <div class="scroll-indicator">{"↓"}</div>
            </section>

            <section id="about" class="about-section">
                <div class="about-content">
                    <div class="section-header">
                        <h2>{"What Vitalis looks at"}</h2>
                        <p>
                            {"A handful of routine measurements carry most of the signal. \
                              The model weighs them together instead of one at a time."}
                        </p>
                    </div>
                    <div class="feature-grid">
                        <div class="feature-item">
                            <h3>{"Vitals"}</h3>
                            <p>{"Blood pressure and body composition, the backbone of every risk score."}</p>
                        </div>
                        <div class="feature-item">
                            <h3>{"Blood work"}</h3>
                            <p>{"Cholesterol panels from your last routine lab visit."}</p>
                        </div>
                        <div class="feature-item">
                            <h3>{"Lifestyle"}</h3>
                            <p>{"Smoking status and the other habits that bend the curve."}</p>
                        </div>
                        <div class="feature-item">
                            <h3>{"Demographics"}</h3>
                            <p>{"Age and sex set the baseline the rest is measured against."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="predict" class="predict-section">
                <div class="section-header">
                    <h2>{"Run your assessment"}</h2>
                    <p>{"Your answers are kept in this browser while you type, so a reload never loses your progress."}</p>
                </div>
                <PredictionForm />
            </section>

            <section id="contact" class="contact-section">
                <div class="section-header">
                    <h2>{"Talk to us"}</h2>
                    <p>{"Clinicians, researchers and the simply curious all welcome."}</p>
                </div>
                <div class="info-grid">
                    <div class="info-card">
                        <h3>{"Research"}</h3>
                        <p>{"Ask about the cohort data and validation studies behind the model."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Clinics"}</h3>
                        <p>{"Embed the assessment in your intake flow."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Press"}</h3>
                        <p>{"Briefings and imagery for coverage."}</p>
                    </div>
                </div>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{"Get model updates and new risk factors as we ship them."}</p>
                <NewsletterForm />
                <p class="footer-note">{"Vitalis is decision support, not a diagnosis. © 2026 Vitalis Health"}</p>
            </footer>
        </div>
    }
}
