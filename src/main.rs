use s3_counter_plug::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
