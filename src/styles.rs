use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide stylesheet. Layout breakpoint is 768px, kept in step with
/// `config::MOBILE_BREAKPOINT_PX`.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                min-height: 100vh;
                overflow-x: hidden;
                background-color: #111827;
                color: #ffffff;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }

            .page-background {
                position: fixed;
                inset: 0;
                z-index: 0;
                overflow: hidden;
            }

            .page-gradient {
                position: absolute;
                inset: 0;
                background: linear-gradient(to bottom right, #1E0A3C, #4B2A99, #3A0CA3);
                opacity: 0.95;
            }

            .blob {
                position: absolute;
                width: 24rem;
                height: 24rem;
                border-radius: 9999px;
                mix-blend-mode: multiply;
                filter: blur(64px);
                opacity: 0.4;
            }

            .page-content {
                position: relative;
                z-index: 10;
            }

            .glass {
                background: rgba(0, 0, 0, 0.3);
                backdrop-filter: blur(16px);
                -webkit-backdrop-filter: blur(16px);
                border: 1px solid rgba(255, 255, 255, 0.1);
            }

            .site-header {
                position: fixed;
                width: 100%;
                z-index: 20;
                background: rgba(0, 0, 0, 0.3);
                backdrop-filter: blur(16px);
                -webkit-backdrop-filter: blur(16px);
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            }

            .header-bar {
                max-width: 80rem;
                margin: 0 auto;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1rem 1.5rem;
            }

            .brand {
                display: flex;
                align-items: center;
                gap: 0.75rem;
            }

            .brand-logo {
                width: 5rem;
                height: 2.5rem;
                object-fit: contain;
            }

            .brand-title {
                margin: 0;
                font-size: 1.5rem;
                font-weight: 700;
                color: transparent;
                background-image: linear-gradient(135deg, #FF006E, #8338EC, #3A86FF);
                -webkit-background-clip: text;
                background-clip: text;
                filter: drop-shadow(0 10px 8px rgba(0, 0, 0, 0.04));
            }

            .desktop-nav {
                display: flex;
                gap: 2rem;
                font-weight: 500;
            }

            .nav-link {
                color: #ffffff;
                text-decoration: none;
                transition: color 0.3s;
            }

            .nav-link:hover {
                color: #c084fc;
            }

            .menu-toggle {
                display: none;
                background: none;
                border: none;
                color: #ffffff;
                font-size: 1.5rem;
                cursor: pointer;
            }

            .mobile-nav {
                display: none;
                padding: 1rem 1.5rem;
                background: rgba(0, 0, 0, 0.3);
                backdrop-filter: blur(16px);
                -webkit-backdrop-filter: blur(16px);
            }

            .mobile-nav-link {
                display: block;
                padding: 0.5rem 0;
            }

            @media (max-width: 767px) {
                .desktop-nav {
                    display: none;
                }

                .menu-toggle {
                    display: block;
                }

                .mobile-nav {
                    display: block;
                }
            }

            .header-spacer {
                height: 5rem;
            }

            .page-section {
                position: relative;
                z-index: 10;
                padding: 5rem 1.5rem;
            }

            .centered {
                text-align: center;
            }

            .section-title {
                font-size: 1.875rem;
                font-weight: 700;
                margin: 0 0 3rem;
                color: #d8b4fe;
            }

            .hero {
                padding: 6rem 1.5rem;
                text-align: center;
            }

            .hero-title {
                font-size: 3.75rem;
                font-weight: 700;
                margin: 0 0 1.5rem;
                color: #d8b4fe;
                filter: drop-shadow(0 0 20px rgb(139, 92, 246));
            }

            .hero-subtitle {
                max-width: 48rem;
                margin: 0 auto 1.5rem;
                font-size: 1.125rem;
                opacity: 0.8;
            }

            .cta-button {
                margin-top: 2rem;
                padding: 0.75rem 2rem;
                border: none;
                border-radius: 9999px;
                font-weight: 600;
                color: #ffffff;
                background: linear-gradient(to right, #9333ea, #6366f1);
                cursor: pointer;
            }

            .panel {
                border-radius: 1.5rem;
                padding: 2.5rem;
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                transition: transform 0.5s;
            }

            .panel:hover {
                transform: scale(1.05);
            }

            .about-panel {
                max-width: 72rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
            }

            .about-text {
                line-height: 1.625;
                opacity: 0.8;
            }

            .about-image {
                width: 100%;
                border-radius: 1rem;
                transition: transform 0.5s;
            }

            .about-image:hover {
                transform: scale(1.05);
            }

            .card-grid {
                max-width: 72rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }

            .card {
                border-radius: 1rem;
                padding: 2rem;
            }

            .card-title {
                font-size: 1.25rem;
                font-weight: 600;
                margin: 0 0 1rem;
                color: #e9d5ff;
            }

            .card-text {
                margin: 0;
                opacity: 0.8;
            }

            .portrait {
                width: 6rem;
                height: 6rem;
                display: block;
                margin: 0 auto 1rem;
                border-radius: 9999px;
                border: 4px solid rgba(255, 255, 255, 0.2);
            }

            .contact-panel {
                max-width: 56rem;
                margin: 0 auto;
            }

            .contact-form {
                display: grid;
                gap: 1.5rem;
            }

            .contact-field {
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
                border: 1px solid rgba(255, 255, 255, 0.2);
                background: rgba(0, 0, 0, 0.2);
                color: #ffffff;
                font: inherit;
            }

            .contact-field::placeholder {
                color: #ffffff;
            }

            .contact-field:focus {
                outline: none;
            }

            .submit-button {
                padding: 0.75rem;
                border: none;
                border-radius: 0.5rem;
                font-weight: 600;
                color: #ffffff;
                background: linear-gradient(to right, #9333ea, #6366f1);
                cursor: pointer;
            }

            .site-footer {
                position: relative;
                z-index: 10;
                padding: 1.5rem;
                text-align: center;
                background: rgba(0, 0, 0, 0.3);
                border-top: 1px solid rgba(255, 255, 255, 0.1);
                color: rgba(255, 255, 255, 0.8);
            }

            @media (max-width: 767px) {
                .hero-title {
                    font-size: 2.25rem;
                }

                .about-panel, .card-grid {
                    grid-template-columns: 1fr;
                }
            }
        "#)} />
    }
}
