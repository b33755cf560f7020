// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // Cabecera + wallet
            translations.insert("titulo", "💎 Cofre Cripto");
            translations.insert("conectar_carteira", "Conectar Wallet");
            translations.insert("conectado", "✅ Conectado:");

            // Avisos
            translations.insert("instale_metamask", "¡Instale Metamask!");
            translations.insert("conecte_carteira", "¡Conecte la wallet!");
            translations.insert("erro_prefixo", "Error: ");
            translations.insert("vault_criado", "¡Vault creado con éxito!");
            translations.insert("saque_realizado", "¡Retiro realizado!");

            // Crear
            translations.insert("criar_vault_titulo", "📦 Crear Vault (ETH)");
            translations.insert("beneficiario_placeholder", "Beneficiario (dirección)");
            translations.insert("valor_placeholder", "Monto en ETH");
            translations.insert("criar_vault_btn", "Crear Vault 🚀");

            // Buscar
            translations.insert("buscar_vault_titulo", "🔍 Buscar Vault");
            translations.insert("vault_id_placeholder", "Vault ID");
            translations.insert("buscar_btn", "Buscar 📂");
            translations.insert("owner", "Owner");
            translations.insert("beneficiario", "Beneficiario");
            translations.insert("valor", "Monto");
            translations.insert("desbloqueio", "Desbloqueo");
            translations.insert("token", "Token");
            translations.insert("retirado", "Retirado");
            translations.insert("retirado_sim", "Sí ✅");
            translations.insert("retirado_nao", "No ❌");

            // Sacar
            translations.insert("sacar_vault_titulo", "💰 Retirar Vault");
            translations.insert("sacar_btn", "Retirar 💸");

            // Modal
            translations.insert("tx_enviada", "¡Transacción enviada!");
            translations.insert("tx_hash", "Tx Hash:");
            translations.insert("fechar", "Cerrar");
        }
        "EN" => {
            translations.insert("titulo", "💎 Crypto Vault");
            translations.insert("conectar_carteira", "Connect Wallet");
            translations.insert("conectado", "✅ Connected:");

            translations.insert("instale_metamask", "Install Metamask!");
            translations.insert("conecte_carteira", "Connect your wallet!");
            translations.insert("erro_prefixo", "Error: ");
            translations.insert("vault_criado", "Vault created successfully!");
            translations.insert("saque_realizado", "Withdrawal complete!");

            translations.insert("criar_vault_titulo", "📦 Create Vault (ETH)");
            translations.insert("beneficiario_placeholder", "Beneficiary (address)");
            translations.insert("valor_placeholder", "Amount in ETH");
            translations.insert("criar_vault_btn", "Create Vault 🚀");

            translations.insert("buscar_vault_titulo", "🔍 Find Vault");
            translations.insert("vault_id_placeholder", "Vault ID");
            translations.insert("buscar_btn", "Search 📂");
            translations.insert("owner", "Owner");
            translations.insert("beneficiario", "Beneficiary");
            translations.insert("valor", "Amount");
            translations.insert("desbloqueio", "Unlock");
            translations.insert("token", "Token");
            translations.insert("retirado", "Withdrawn");
            translations.insert("retirado_sim", "Yes ✅");
            translations.insert("retirado_nao", "No ❌");

            translations.insert("sacar_vault_titulo", "💰 Withdraw Vault");
            translations.insert("sacar_btn", "Withdraw 💸");

            translations.insert("tx_enviada", "Transaction sent!");
            translations.insert("tx_hash", "Tx Hash:");
            translations.insert("fechar", "Close");
        }
        "PT" | _ => {
            translations.insert("titulo", "💎 Cofre Cripto");
            translations.insert("conectar_carteira", "Conectar Carteira");
            translations.insert("conectado", "✅ Conectado:");

            translations.insert("instale_metamask", "Instale o Metamask!");
            translations.insert("conecte_carteira", "Conecte a carteira!");
            translations.insert("erro_prefixo", "Erro: ");
            translations.insert("vault_criado", "Vault criado com sucesso!");
            translations.insert("saque_realizado", "Saque realizado!");

            translations.insert("criar_vault_titulo", "📦 Criar Vault (ETH)");
            translations.insert("beneficiario_placeholder", "Beneficiário (endereço)");
            translations.insert("valor_placeholder", "Valor em ETH");
            translations.insert("criar_vault_btn", "Criar Vault 🚀");

            translations.insert("buscar_vault_titulo", "🔍 Buscar Vault");
            translations.insert("vault_id_placeholder", "Vault ID");
            translations.insert("buscar_btn", "Buscar 📂");
            translations.insert("owner", "Owner");
            translations.insert("beneficiario", "Beneficiário");
            translations.insert("valor", "Valor");
            translations.insert("desbloqueio", "Desbloqueio");
            translations.insert("token", "Token");
            translations.insert("retirado", "Retirado");
            translations.insert("retirado_sim", "Sim ✅");
            translations.insert("retirado_nao", "Não ❌");

            translations.insert("sacar_vault_titulo", "💰 Sacar Vault");
            translations.insert("sacar_btn", "Sacar 💸");

            translations.insert("tx_enviada", "Transação enviada!");
            translations.insert("tx_hash", "Tx Hash:");
            translations.insert("fechar", "Fechar");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la traducción de `key` para `lang` ("PT", "ES", "EN").
/// Idioma desconocido → portugués; clave desconocida → la propia clave.
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}
