use log::info;
use yew::prelude::*;

use crate::components::hover::use_hover;
use crate::components::section::RevealSection;
use crate::config;
use crate::content::{self, ServiceCard, TeamMember, SERVICES};
use crate::motion::{BUTTON_GLOW, CARD_LIFT, SUBMIT_GLOW};

#[function_component(Hero)]
fn hero() -> Html {
    let cta = use_hover(BUTTON_GLOW);

    html! {
        <RevealSection label="hero" class="hero">
            <h2 class="hero-title">{content::HERO_TITLE}</h2>
            <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
            <button
                class="cta-button"
                style={cta.style}
                onmouseenter={cta.onmouseenter}
                onmouseleave={cta.onmouseleave}
            >
                {"Get Started"}
            </button>
        </RevealSection>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <RevealSection label="about" id="about">
            <div class="glass panel about-panel">
                <div>
                    <h3 class="section-title">{content::ABOUT_TITLE}</h3>
                    <p class="about-text">{content::ABOUT_BODY}</p>
                </div>
                <img src={config::ABOUT_IMAGE_URL} alt="About" class="about-image" />
            </div>
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceCard,
}

#[function_component(ServiceCardView)]
fn service_card(props: &ServiceCardProps) -> Html {
    let lift = use_hover(CARD_LIFT);

    html! {
        <div
            class="glass card"
            style={lift.style}
            onmouseenter={lift.onmouseenter}
            onmouseleave={lift.onmouseleave}
        >
            <h4 class="card-title">{props.service.title}</h4>
            <p class="card-text">{props.service.description}</p>
        </div>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <RevealSection label="services" id="services" class="centered">
            <h3 class="section-title">{"Our Services"}</h3>
            <div class="card-grid">
                {
                    SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <ServiceCardView key={i} service={*service} />
                    }).collect::<Html>()
                }
            </div>
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: TeamMember,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let lift = use_hover(CARD_LIFT);
    let member = &props.member;

    html! {
        <div
            class="glass card"
            style={lift.style}
            onmouseenter={lift.onmouseenter}
            onmouseleave={lift.onmouseleave}
        >
            <img src={member.portrait.clone()} alt={member.name} class="portrait" />
            <h4 class="card-title">{member.name}</h4>
            <p class="card-text">{member.role}</p>
        </div>
    }
}

#[function_component(Team)]
fn team() -> Html {
    html! {
        <RevealSection label="team" id="team" class="centered">
            <h3 class="section-title">{"Meet Our Team"}</h3>
            <div class="card-grid">
                {
                    content::team().into_iter().enumerate().map(|(i, member)| html! {
                        <TeamCard key={i} member={member} />
                    }).collect::<Html>()
                }
            </div>
        </RevealSection>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let submit = use_hover(SUBMIT_GLOW);

    // Nothing is sent anywhere; just keep the page from navigating.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted; no handler is configured");
    });

    html! {
        <RevealSection label="contact" id="contact" class="centered">
            <div class="glass panel contact-panel">
                <h3 class="section-title">{"Contact Us"}</h3>
                <form class="contact-form" {onsubmit}>
                    <input type="text" placeholder="Your Name" class="contact-field" />
                    <input type="email" placeholder="Your Email" class="contact-field" />
                    <textarea rows="4" placeholder="Your Message" class="contact-field"></textarea>
                    <button
                        type="submit"
                        class="submit-button"
                        style={submit.style}
                        onmouseenter={submit.onmouseenter}
                        onmouseleave={submit.onmouseleave}
                    >
                        {"Send Message"}
                    </button>
                </form>
            </div>
        </RevealSection>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{config::COPYRIGHT}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <div class="header-spacer"></div>
            <Hero />
            <About />
            <Services />
            <Team />
            <Contact />
            <Footer />
        </>
    }
}
