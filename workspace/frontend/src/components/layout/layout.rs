use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 p-6">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-4 bg-base-300 text-base-content">
                <p>{"HomePrice · Indian house price estimates"}</p>
            </footer>
        </div>
    }
}
