// Páginas HTML (maud). Cada função recebe só os dados já carregados
// e devolve a página inteira; quem decide qual página mostrar é o handler.
pub mod home;
pub mod layout;
pub mod select;
pub mod stock;
pub mod uniforms;
